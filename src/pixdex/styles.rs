use console::Style;
use once_cell::sync::Lazy;

pub struct Theme {
    pub index_favorite: Style,
    pub index_regular: Style,
    pub kind: Style,
    pub time: Style,
}

pub static THEME: Lazy<Theme> = Lazy::new(|| Theme {
    index_favorite: Style::new().yellow(),
    index_regular: Style::new(),
    kind: Style::new().cyan().dim(),
    time: Style::new().color256(245).italic(),
});
