//! Prints the bcrypt hash of a password for `ADMIN_PASSWORD_HASH`.
//!
//! Usage:
//!     cargo run --bin hash_password

use std::io::{self, BufRead, Write};

const MIN_PASSWORD_LEN: usize = 8;

fn prompt(label: &str) -> io::Result<String> {
    print!("{}\n> ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() -> anyhow::Result<()> {
    let password = prompt("Enter the admin password:")?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        anyhow::bail!("Password must be at least {} characters", MIN_PASSWORD_LEN);
    }

    let confirm = prompt("Confirm password:")?;
    if password != confirm {
        anyhow::bail!("Passwords do not match");
    }

    let hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;
    // Single quotes keep dotenvy from expanding the `$` separators.
    println!("\nADMIN_PASSWORD_HASH='{}'", hash);
    Ok(())
}
