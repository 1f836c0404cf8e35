/// Where the text under analysis came from.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputSource {
    Arguments,
    Stdin,
    /// Nothing was given and stdin is interactive.
    None,
}

impl InputSource {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Arguments => "command-line arguments",
            Self::Stdin => "standard input",
            Self::None => "nothing",
        }
    }
}
