mod grab;
mod prompt;

use clap::Parser;

use crate::models::config::UserConfig;

#[derive(Parser)]
#[command(name = "leetgrab")]
#[command(about = "Fetch a LeetCode problem into a local solution file", long_about = None)]
pub struct Cli {
    /// Problem link, e.g. https://leetcode.com/problems/two-sum/description/
    pub link: String,
}

pub fn run(cli: Cli, user_config: &UserConfig) {
    if let Err(e) = grab::grab_problem(&cli.link, user_config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
