//! Asset block injection for the HTML entry point.
//!
//! A block looks like:
//!
//! ```text
//! <!-- build:js scripts/app.js -->
//! <script src="scripts/app.js"></script>
//! <!-- endbuild -->
//! ```
//!
//! JS blocks go right before `</body>`, CSS blocks right before `</head>`.
//! Without the closing tag the block is appended at the end of the document.

/// Kind of asset referenced by a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetType {
    Js,
    Css,
}

impl AssetType {
    fn tag(&self) -> &'static str {
        match self {
            AssetType::Js => "js",
            AssetType::Css => "css",
        }
    }

    fn closing_anchor(&self) -> &'static str {
        match self {
            AssetType::Js => "</body>",
            AssetType::Css => "</head>",
        }
    }

    fn reference(&self, src: &str) -> String {
        match self {
            AssetType::Js => format!("<script src=\"{src}\"></script>"),
            AssetType::Css => format!("<link rel=\"stylesheet\" href=\"{src}\">"),
        }
    }
}

/// A list of source files the build step concatenates into `optimized_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBlock {
    pub asset_type: AssetType,
    pub optimized_path: String,
    pub source_files: Vec<String>,
}

impl AssetBlock {
    /// The script block for the generated `app/scripts/app.js`.
    pub fn app_script() -> Self {
        AssetBlock {
            asset_type: AssetType::Js,
            optimized_path: "scripts/app.js".to_string(),
            source_files: vec!["scripts/app.js".to_string()],
        }
    }

    /// Render the block, each line prefixed with `indent`.
    pub fn render(&self, indent: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{indent}<!-- build:{} {} -->\n",
            self.asset_type.tag(),
            self.optimized_path
        ));
        for src in &self.source_files {
            out.push_str(indent);
            out.push_str(&self.asset_type.reference(src));
            out.push('\n');
        }
        out.push_str(&format!("{indent}<!-- endbuild -->\n"));
        out
    }
}

/// Insert `block` into `html` before the matching closing tag.
pub fn append_files(html: &str, block: &AssetBlock) -> String {
    let anchor = block.asset_type.closing_anchor();
    let Some(idx) = html.rfind(anchor) else {
        let mut out = html.to_string();
        if !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&block.render(""));
        return out;
    };

    // Start of the line holding the anchor; indent the block one level past it.
    let line_start = html[..idx].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let anchor_indent: String = html[line_start..idx]
        .chars()
        .take_while(|c| c.is_whitespace())
        .collect();
    let only_ws_before = html[line_start..idx].trim().is_empty();

    let mut out = String::with_capacity(html.len() + 128);
    if only_ws_before {
        out.push_str(&html[..line_start]);
        out.push_str(&block.render(&format!("{anchor_indent}    ")));
        out.push_str(&html[line_start..]);
    } else {
        out.push_str(&html[..idx]);
        out.push('\n');
        out.push_str(&block.render("    "));
        out.push_str(&html[idx..]);
    }
    out
}
