/// Splits one comma-separated record into its fields.
///
/// Double-quoted fields may contain commas; a doubled quote inside a quoted
/// field stands for a literal `"`. Records never span lines.
///
/// # Errors
/// Returns a human-readable reason if a quoted field is not terminated.
pub(crate) fn split_record(line: &str) -> Result<Vec<String>, String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' if field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quoted field".into());
    }

    fields.push(field);
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_fields() {
        assert_eq!(split_record("1.5,20").unwrap(), vec!["1.5", "20"]);
        assert_eq!(split_record("a,,c").unwrap(), vec!["a", "", "c"]);
    }

    #[test]
    fn quoted_fields_keep_commas_and_quotes() {
        let got = split_record(r#""Study, Hours","say ""hi""",3"#).unwrap();
        assert_eq!(got, vec!["Study, Hours", r#"say "hi""#, "3"]);
    }

    #[test]
    fn trailing_comma_yields_empty_field() {
        assert_eq!(split_record("1,").unwrap(), vec!["1", ""]);
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        assert!(split_record(r#""open,1"#).is_err());
    }
}
