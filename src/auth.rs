use anyhow::{Result, bail};
use std::io::{self, IsTerminal};
use zeroize::Zeroizing;

/// Read the password to check against a stored record.
pub fn read_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env_or_pipe()? {
        return Ok(pw);
    }

    let pw = rpassword::prompt_password("Password: ")?;
    if pw.is_empty() {
        bail!("no password provided");
    }

    Ok(Zeroizing::new(pw))
}

/// Read a password to hash, confirming it when on a terminal.
pub fn read_new_password() -> Result<Zeroizing<String>> {
    if let Some(pw) = password_from_env_or_pipe()? {
        return Ok(pw);
    }

    let pw1 = Zeroizing::new(rpassword::prompt_password("New password: ")?);
    let pw2 = Zeroizing::new(rpassword::prompt_password("Confirm password: ")?);

    if pw1.is_empty() {
        bail!("password cannot be empty");
    }
    if pw1 != pw2 {
        bail!("passwords do not match");
    }

    Ok(pw1)
}

//  Environment variable
//  CREDENT_PASSWORD="hunter2" credent hash
//
//  stdin (pipeline)
//  echo "hunter2" | credent verify "$RECORD"
fn password_from_env_or_pipe() -> Result<Option<Zeroizing<String>>> {
    if let Ok(pw) = std::env::var("CREDENT_PASSWORD") {
        if !pw.is_empty() {
            return Ok(Some(Zeroizing::new(pw)));
        }
    }

    if !io::stdin().is_terminal() {
        let mut pw = Zeroizing::new(String::new());
        io::stdin().read_line(&mut pw)?;
        trim_newline(&mut pw);

        if pw.is_empty() {
            bail!("no password provided");
        }
        return Ok(Some(pw));
    }

    Ok(None)
}

fn trim_newline(s: &mut String) {
    while s.ends_with('\n') || s.ends_with('\r') {
        s.pop();
    }
}
