//! `choices` command

use ckpe_ini::ChoiceTable;
use colored::Colorize;

/// Print every name and code in a choice table
pub fn run_choices(table: ChoiceTable) {
    println!("{}", format!("{table} values:").bold());
    for choice in table.choices() {
        println!("  {:>4}  {}", choice.code.to_string().yellow(), choice.name);
    }
}
