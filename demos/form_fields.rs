//! Validating user-supplied form fields with fail-fast chains.
//!
//! Run with: `cargo run --example form_fields`

use regex::Regex;
use sill::{date, string, Error};

struct Signup<'a> {
    username: &'a str,
    display_name: &'a str,
    birthday: &'a str,
}

fn check_signup(form: &Signup) -> Result<(), Error> {
    let forbidden = Regex::new(r"[^a-z0-9_]+").unwrap();

    string("username", form.username)
        .not_empty()?
        .length_between(3, 20)?
        .not_matches(&forbidden)?;

    string("display_name", form.display_name)
        .not_empty()?
        .max_length(64)?;

    date("birthday", form.birthday).must_be_valid_date()?;

    Ok(())
}

fn main() {
    let good = Signup {
        username: "ada_lovelace",
        display_name: "Ada Lovelace",
        birthday: "1815-12-10",
    };
    match check_signup(&good) {
        Ok(()) => println!("signup accepted"),
        Err(err) => println!("rejected: {err}"),
    }

    let bad = Signup {
        username: "Ada Lovelace!",
        display_name: "Ada Lovelace",
        birthday: "1815-12-10",
    };
    match check_signup(&bad) {
        Ok(()) => println!("signup accepted"),
        Err(err) => {
            // The error knows which field failed and why.
            println!("rejected field `{}`: {err}", err.field());
        }
    }
}
