// Example demonstrating validation and in-place lookups

use picowalk::{
    begin_array, begin_object, begin_string, index, lookup, number, string, unescape, validate_str,
    Cursor, ParseError,
};

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": "sensor\tA", "readings": [20.5, 21.25, -3e-1], "ok": true}"#;
    println!("Input: {}", json);

    let kind = validate_str(json)?;
    println!("Valid JSON {}", kind);

    let members = begin_object(Cursor::new_str(json)).ok_or(ParseError::InvalidSyntax)?;

    if let Some(name) = lookup("name", members) {
        let (_, len) = string(name).ok_or(ParseError::InvalidSyntax)?;
        let mut buffer = [0u8; 32];
        let body = begin_string(name).ok_or(ParseError::InvalidSyntax)?;
        let (_, written) = unescape(&mut buffer, body);
        println!(
            "name: {:?} ({} characters)",
            String::from_utf8_lossy(&buffer[..written]),
            len
        );
    }

    if let Some(readings) = lookup("readings", members).and_then(begin_array) {
        for i in 0.. {
            match index(i, readings).and_then(number) {
                Some((_, value)) => println!("readings[{}] = {}", i, value),
                None => break,
            }
        }
    }

    for bad in ["[1,]", "{\"a\" 1}", "[1] x"] {
        println!("{:?} -> {}", bad, validate_str(bad).unwrap_err());
    }
    Ok(())
}
