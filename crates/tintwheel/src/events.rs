#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Reset,
    SelectHue(usize),
    SelectShade(usize),
    ConfigReload,
}
