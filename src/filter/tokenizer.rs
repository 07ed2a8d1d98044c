/// Split directive arguments on `,` and trim surrounding spaces from each field.
///
/// An empty argument string still yields one (empty) field.
pub fn split_fields(args: &str) -> Vec<&str> {
    args.split(',').map(|f| f.trim_matches(' ')).collect()
}

/// Arguments of a `#setting` line: the tokenized fields plus everything after the
/// first comma as one string, so titles and descriptions may contain commas.
pub fn split_setting(args: &str) -> (Vec<&str>, &str) {
    let rest = match args.find(',') {
        Some(idx) => &args[idx + 1..],
        None => "",
    };
    (split_fields(args), rest.trim_matches(' '))
}
