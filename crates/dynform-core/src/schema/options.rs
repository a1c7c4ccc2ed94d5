/// Splits the comma-delimited options text a designer types into the option
/// list of a choice field.
///
/// Entries are kept exactly as typed: no trimming, no de-duplication, empty
/// entries included. The empty string therefore yields one empty option.
pub fn split_options(raw: &str) -> Vec<String> {
    raw.split(',').map(String::from).collect()
}
