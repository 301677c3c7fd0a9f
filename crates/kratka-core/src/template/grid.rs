//! The built-in graph-paper document
//!
//! A memoir page whose `geometry` options come from `page.*` and whose single
//! TikZ `grid` comes from `grid.*` and `line.*`. Needs the memoir, geometry
//! and tikz LaTeX packages.

use crate::params::RenderParameters;
use crate::template::engine::TemplateEngine;
use crate::template::error::TemplateError;

/// LaTeX source of the grid document with `@@key@@` placeholders
pub const GRID_TEMPLATE: &str = r"\documentclass[a4paper,11pt]{memoir}

\usepackage[T1]{fontenc}
\usepackage{lmodern}
\usepackage[margin=@@page.margin@@,
  hoffset=@@page.hoffset@@,
  voffset=@@page.voffset@@,
  showframe=@@page.showframe@@]{geometry}
\usepackage{tikz}

\setlength{\topskip}{0mm}
\setlength{\parindent}{0mm}

\begin{document}

\pagestyle{empty}

\begin{vplace}
  \begin{centering}

    \begin{tikzpicture}[x=@@grid.cell_width@@, y=@@grid.cell_height@@]
      \draw[step=@@grid.step@@, @@line.width@@, @@line.color@@, @@line.style@@]
        (0,0) grid (@@grid.columns@@, @@grid.rows@@);
    \end{tikzpicture}

  \end{centering}
\end{vplace}

\end{document}
";

/// Render the grid document for the given parameters
pub fn render_document(params: &RenderParameters) -> Result<String, TemplateError> {
    TemplateEngine::new().render(GRID_TEMPLATE, &params.to_context())
}
