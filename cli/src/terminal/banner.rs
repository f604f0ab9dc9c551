use colored::*;

use super::print;

const BANNER: &str = r#"
             _                      _
   ___ _   _| |__  _ __  _ __ ___ | |__   ___
  / __| | | | '_ \| '_ \| '__/ _ \| '_ \ / _ \
  \__ \ |_| | |_) | |_) | | | (_) | |_) |  __/
  |___/\__,_|_.__/| .__/|_|  \___/|_.__/ \___|
                  |_|
"#;

pub fn print() {
    print::print(&format!("{}", BANNER.bright_green().bold()));
}
