//! Domain types for the Float generator.
//!
//! [`AnswerSet`] holds raw prompt answers as the user gave them. The closed
//! enums ([`Feature`], [`IconFont`], [`WebFont`], [`TestFramework`]) are what
//! those strings are validated into, and [`FeatureDecisionSet`] is the
//! immutable result handed to the renderer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Answer set
// ---------------------------------------------------------------------------

fn default_true() -> bool {
    true
}

/// Raw answers collected from the prompt step (or an answers file).
///
/// Field names follow the prompt keys so that answer files read the same as
/// the interactive questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerSet {
    #[serde(default)]
    pub site_name: String,
    #[serde(default = "default_true")]
    pub include_bourbon: bool,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub which_icon_font: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub which_web_font: Option<String>,
}

impl Default for AnswerSet {
    fn default() -> Self {
        AnswerSet {
            site_name: String::new(),
            include_bourbon: true,
            features: Vec::new(),
            which_icon_font: None,
            which_web_font: None,
        }
    }
}

impl AnswerSet {
    /// Known features named in `features`, in first-seen order, deduplicated.
    /// Unknown tokens are dropped.
    pub fn known_features(&self) -> Vec<Feature> {
        let mut out = Vec::new();
        for token in &self.features {
            if let Ok(feature) = token.parse::<Feature>() {
                if !out.contains(&feature) {
                    out.push(feature);
                }
            }
        }
        out
    }

    /// Whether `feature` was selected. Position in the list is irrelevant.
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.known_features().contains(&feature)
    }

    /// The icon-font question is only asked when `iconfont` is selected.
    pub fn needs_icon_font_choice(&self) -> bool {
        self.has_feature(Feature::IconFont)
    }

    /// The web-font question is only asked when `webfont` is selected.
    pub fn needs_web_font_choice(&self) -> bool {
        self.has_feature(Feature::WebFont)
    }
}

// ---------------------------------------------------------------------------
// Feature
// ---------------------------------------------------------------------------

/// Optional scaffold capabilities offered in the feature checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "modernizr")]
    Modernizr,
    #[serde(rename = "grid")]
    Grid,
    #[serde(rename = "iconfont")]
    IconFont,
    #[serde(rename = "webfont")]
    WebFont,
}

impl Feature {
    /// All features in checklist order.
    pub fn all() -> &'static [Feature] {
        &[
            Feature::Modernizr,
            Feature::Grid,
            Feature::IconFont,
            Feature::WebFont,
        ]
    }

    /// Token used in answer sets.
    pub fn token(&self) -> &'static str {
        match self {
            Feature::Modernizr => "modernizr",
            Feature::Grid => "grid",
            Feature::IconFont => "iconfont",
            Feature::WebFont => "webfont",
        }
    }

    /// Human label shown in the checklist.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::Modernizr => "Modernizr",
            Feature::Grid => "Grid system",
            Feature::IconFont => "Icon font",
            Feature::WebFont => "Web font",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Feature {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feature::all()
            .iter()
            .copied()
            .find(|f| f.token() == s.trim())
            .ok_or_else(|| format!("unknown feature '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Fonts
// ---------------------------------------------------------------------------

/// Icon fonts offered when the `iconfont` feature is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconFont {
    FontAwesome,
    Foundicons,
}

impl IconFont {
    pub fn all() -> &'static [IconFont] {
        &[IconFont::FontAwesome, IconFont::Foundicons]
    }

    pub fn id(&self) -> &'static str {
        match self {
            IconFont::FontAwesome => "font-awesome",
            IconFont::Foundicons => "foundicons",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IconFont::FontAwesome => "Font Awesome",
            IconFont::Foundicons => "Foundicons",
        }
    }

    /// Directory bower installs the font into, under `bower_components/`.
    pub fn bower_package(&self) -> &'static str {
        match self {
            IconFont::FontAwesome => "font-awesome",
            IconFont::Foundicons => "foundation-icon-fonts",
        }
    }
}

impl fmt::Display for IconFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for IconFont {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        IconFont::all()
            .iter()
            .copied()
            .find(|f| f.id().eq_ignore_ascii_case(s) || f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown icon font '{s}'"))
    }
}

/// Web fonts offered when the `webfont` feature is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WebFont {
    OpenSans,
}

impl WebFont {
    pub fn all() -> &'static [WebFont] {
        &[WebFont::OpenSans]
    }

    pub fn id(&self) -> &'static str {
        match self {
            WebFont::OpenSans => "open-sans",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WebFont::OpenSans => "Open Sans",
        }
    }
}

impl fmt::Display for WebFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for WebFont {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WebFont::all()
            .iter()
            .copied()
            .find(|f| f.id().eq_ignore_ascii_case(s) || f.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown web font '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Test framework
// ---------------------------------------------------------------------------

/// Test framework wired into the build script and handed to the
/// sub-generator hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    #[default]
    Mocha,
    Jasmine,
    None,
}

impl TestFramework {
    pub fn all() -> &'static [TestFramework] {
        &[TestFramework::Mocha, TestFramework::Jasmine, TestFramework::None]
    }

    /// Sub-generator namespace, or `None` when no hook should run.
    pub fn generator(&self) -> Option<String> {
        match self {
            TestFramework::None => None,
            other => Some(format!("{other}:app")),
        }
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestFramework::Mocha => write!(f, "mocha"),
            TestFramework::Jasmine => write!(f, "jasmine"),
            TestFramework::None => write!(f, "none"),
        }
    }
}

impl FromStr for TestFramework {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mocha" => Ok(TestFramework::Mocha),
            "jasmine" => Ok(TestFramework::Jasmine),
            "none" => Ok(TestFramework::None),
            other => Err(format!(
                "unknown test framework '{other}'; expected: mocha, jasmine, none"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Decision set
// ---------------------------------------------------------------------------

/// Normalised feature decisions derived from an [`AnswerSet`].
///
/// A font is `Some` only when its gating feature was selected, so the
/// `include_*_font` checks can never be true without a concrete choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDecisionSet {
    pub site_name: String,
    pub include_bourbon: bool,
    pub include_modernizr: bool,
    pub include_grid: bool,
    pub icon_font: Option<IconFont>,
    pub web_font: Option<WebFont>,
}

impl FeatureDecisionSet {
    pub fn include_icon_font(&self) -> bool {
        self.icon_font.is_some()
    }

    pub fn include_web_font(&self) -> bool {
        self.web_font.is_some()
    }
}

/// Name and version of the generator, exposed to templates as `pkg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMeta {
    pub name: String,
    pub version: String,
}

impl PackageMeta {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        PackageMeta {
            name: name.into(),
            version: version.into(),
        }
    }
}
