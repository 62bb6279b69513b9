/// One BEGIN/END block while it is being accumulated. A record with N phone
/// numbers expands into N contacts when the END marker is reached.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub name: String,
    pub phones: Vec<String>,
}

/// The unit of output: one (name, phone) pair, one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
}

/// A fully rendered output card, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCard {
    pub filename: String,
    pub body: String,
}
