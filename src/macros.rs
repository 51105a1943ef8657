/// Builds a [`FormDataSet`](crate::FormDataSet) of `text` entries.
///
/// Evaluates to `Result<FormDataSet>`; entries keep the order they are
/// written in.
///
/// # Examples
///
/// ```rust
/// use form_encoding::{form_data, FormOptions};
///
/// let set = form_data! { "a" => "1", "b" => "2" }.unwrap();
/// assert_eq!(set.as_plaintext(&FormOptions::default()), "a=1\r\nb=2\r\n");
/// ```
#[macro_export]
macro_rules! form_data {
    // Handle empty set
    () => {
        $crate::Result::Ok($crate::FormDataSet::new())
    };

    ($($name:expr => $value:expr),+ $(,)?) => {{
        let mut set = $crate::FormDataSet::new();
        let appended: $crate::Result<()> = $crate::Result::Ok(())
            $(.and_then(|()| set.append_text(&$name, &$value, "text")))+;
        appended.map(|()| set)
    }};
}

#[cfg(test)]
mod tests {
    use crate::Error;

    #[test]
    fn test_form_data_macro_empty() {
        let set = form_data!().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_form_data_macro_entries() {
        let user = String::from("alice");
        let set = form_data! {
            "user" => user,
            "age" => 30.to_string(),
        }
        .unwrap();

        assert_eq!(set.names().collect::<Vec<_>>(), ["user", "age"]);
        assert_eq!(set.entries()[1].payload(), b"30");
    }

    #[test]
    fn test_form_data_macro_rejects_empty_name() {
        let result = form_data! { "ok" => "1", "" => "2" };
        assert!(matches!(result, Err(Error::EmptyName)));
    }
}
