//! Welcome banner printed before the questions.

use colored::Colorize;

pub fn print_welcome() {
    println!("{}", "            _~       ".red());
    println!("{}", "         _~)_) _~    ".red());
    println!("{}", "        )_))_))_)    ".red());
    println!("{}", "        _!__!__!_    ".yellow());
    println!(
        "{}{}{}{}{}",
        "~~~~~~~~".cyan(),
        "\\_____".yellow(),
        "t".white(),
        "_/".yellow(),
        "~~~~~~~~~~~~~~~~ FLOAT ~~~~~~~~".cyan()
    );
    println!(
        "{}",
        "Ahoy! You wanna be a real pirate!? Answer the next questions and you're in!".red()
    );
}
