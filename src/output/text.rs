use crate::error::AppResult;
use crate::profile::ValidationErrors;

pub fn print_line(line: &str) -> AppResult<()> {
    println!("{line}");
    Ok(())
}

pub fn print_field_errors(errors: &ValidationErrors) -> AppResult<()> {
    for (field, message) in errors.iter() {
        println!("  {field}: {message}");
    }
    Ok(())
}
