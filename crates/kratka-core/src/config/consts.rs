//! Built-in defaults

/// Page geometry defaults
pub mod page {
    pub const MARGIN: &str = "1cm";
    pub const HORIZONTAL_OFFSET: &str = "0cm";
    pub const VERTICAL_OFFSET: &str = "0cm";
    pub const SHOW_FRAME: bool = false;
}

/// Grid geometry defaults (an A4 page with 4.25mm cells)
pub mod grid {
    pub const CELL_WIDTH: &str = "4.25mm";
    pub const CELL_HEIGHT: &str = "4.25mm";
    pub const STEP: &str = "4.25mm";
    pub const COLUMNS: i64 = 43;
    pub const ROWS: i64 = 64;
}

/// TikZ line style defaults
pub mod line {
    pub const WIDTH: &str = "very thin";
    pub const COLOR: &str = "gray";
    pub const STYLE: &str = "solid";
}

/// External compiler defaults
pub mod compiler {
    pub const PROGRAM: &str = "pdflatex";
}
