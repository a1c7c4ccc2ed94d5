/// Builds a [`Record`](crate::Record) from `key => value` pairs, keeping the
/// order in which the keys are written.
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    (
        $( $key:expr => $value:expr ),+ $(,)?
    ) => {{
        let mut record = $crate::Record::new();
        $( record.insert($key, $value); )+
        record
    }};
}
