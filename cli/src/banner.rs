use colored::*;

// figlet "m3ucheck", one color per word part
#[rustfmt::skip]
pub fn print_banner() {
    eprintln!("{}{}{}",   "  _ __ ___  ".red().bold(),    " _____ ".yellow().bold(), "  ___| |__   ___  ___| | __".cyan().bold());
    eprintln!("{}{}{}",   " | '_ ` _ \\ ".red().bold(),   "|___ / ".yellow().bold(), " / __| '_ \\ / _ \\/ __| |/ /".cyan().bold());
    eprintln!("{}{}{}",   " | | | | | |".red().bold(),    "  |_ \\ ".yellow().bold(), "| (__| | | |  __/ (__|   < ".cyan().bold());
    eprintln!("{}{}{}",   " |_| |_| |_|".red().bold(),    " ___) |".yellow().bold(), " \\___|_| |_|\\___|\\___|_|\\_\\".cyan().bold());
    eprintln!("{}{}",     "            ".red().bold(),    "|____/ ".yellow().bold());
}
