use anstyle::AnsiColor;
use vet_lib::category::Category;
use vet_lib::constants::style_from_fg;
use vet_lib::constants::ERROR_STYLE;
use vet_lib::constants::HELP_STYLE;
use vet_lib::constants::PRIMARY_STYLE;

/// Util function for getting the style for the CLI.
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// The usage banner, shown when a token fails classification.
pub fn usage_lines() -> Vec<String> {
    let categories: Vec<_> = Category::REGISTRY.into_iter().map(Category::name).collect();

    vec![
        "usage: cumulo-vet [--bats] [--debug] [CATEGORY | CLI-SUBTEST | PATH]...".to_string(),
        format!("categories: {}", categories.join(" ")),
        "run cumulo-vet --help for details".to_string(),
    ]
}

/// Print the usage banner.
pub fn print_usage() {
    for line in usage_lines() {
        println!("{line}");
    }
}

/// Mark a category as passed.
pub fn print_ok(subject: &str) {
    println!("{PRIMARY_STYLE}ok:{PRIMARY_STYLE:#} {subject}");
}

/// Mark a category as failed.
pub fn print_fail(subject: &str) {
    println!("{ERROR_STYLE}fail:{ERROR_STYLE:#} {subject}");
}

#[cfg(test)]
#[path = "tests/printing.rs"]
mod tests;
