//! `float features`: list the closed feature set.

use anyhow::Result;
use colored::Colorize;

use float_core::{Feature, IconFont, TestFramework, WebFont};

pub fn run() -> Result<()> {
    println!("{}", "FEATURES".bold());
    for feature in Feature::all() {
        println!("  {:<10} {}", feature.token().green(), feature.label());
        let choices: Vec<&str> = match feature {
            Feature::IconFont => IconFont::all().iter().map(IconFont::id).collect(),
            Feature::WebFont => WebFont::all().iter().map(WebFont::id).collect(),
            _ => continue,
        };
        println!("  {:<10} choices: {}", "", choices.join(", "));
    }

    let frameworks: Vec<String> = TestFramework::all().iter().map(|f| f.to_string()).collect();
    println!();
    println!("{}", "TEST FRAMEWORKS".bold());
    println!("  {} (default: {})", frameworks.join(", "), TestFramework::default());
    Ok(())
}
