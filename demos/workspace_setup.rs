//! Preparing an output workspace: directory creation and file preconditions.
//!
//! Run with: `cargo run --example workspace_setup`

use sill::{directory, file, Error};

fn prepare(workspace: &str, input: &str) -> Result<(), Error> {
    // Input must already be there and be usable.
    file("input", input)
        .must_exist()?
        .must_be_file()?
        .must_be_readable()?
        .must_not_be_empty()?
        .must_be_extension(&["csv", "tsv"])?;

    // Output workspace is created on demand, parents included.
    directory("workspace", workspace)
        .ensure_exists()?
        .must_be_writable()?;

    Ok(())
}

fn main() {
    let tmp = std::env::temp_dir().join("sill-demo");
    let workspace = tmp.join("out").join("run-1");
    let input = tmp.join("input.csv");

    std::fs::create_dir_all(&tmp).unwrap();
    std::fs::write(&input, "a,b,c\n1,2,3\n").unwrap();

    match prepare(workspace.to_str().unwrap(), input.to_str().unwrap()) {
        Ok(()) => println!("workspace ready at {}", workspace.display()),
        Err(err) => println!("setup failed on `{}`: {err}", err.field()),
    }
}
