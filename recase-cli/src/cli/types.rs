use clap::ValueEnum;
use recase_core::Style;

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum ModeArg {
    Upper,
    Lower,
    Pascal,
    Camel,
    Snake,
    Kebab,
    Title,
    Screaming,
}

impl From<ModeArg> for Style {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Upper => Self::Upper,
            ModeArg::Lower => Self::Lower,
            ModeArg::Pascal => Self::Pascal,
            ModeArg::Camel => Self::Camel,
            ModeArg::Snake => Self::Snake,
            ModeArg::Kebab => Self::Kebab,
            ModeArg::Title => Self::Title,
            ModeArg::Screaming => Self::Screaming,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum OutputFormat {
    Summary,
    Json,
}
