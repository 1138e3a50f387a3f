//! Render context: serializable payload built from a [`FeatureDecisionSet`].

use serde::{Deserialize, Serialize};

use float_core::{FeatureDecisionSet, PackageMeta, TestFramework};

use crate::error::RenderError;

/// Flat rendering payload handed to every template.
///
/// Font fields carry the identifier (`"font-awesome"`, `"open-sans"`) and
/// are `None` whenever the matching `include_*` flag is false.
/// `icon_font_package` is the bower package directory for the icon font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    pub site_name: String,
    /// Package-manifest safe form of `site_name`.
    pub site_slug: String,
    pub include_bourbon: bool,
    pub include_modernizr: bool,
    pub include_grid: bool,
    pub include_icon_font: bool,
    pub icon_font: Option<String>,
    pub icon_font_package: Option<String>,
    pub include_web_font: bool,
    pub web_font: Option<String>,
    pub test_framework: String,
    pub pkg: PkgCtx,
}

/// Generator metadata exposed as `pkg.*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PkgCtx {
    pub name: String,
    pub version: String,
}

impl RenderContext {
    /// Build a [`RenderContext`]. Deterministic: equal inputs give equal output.
    pub fn build(
        decisions: &FeatureDecisionSet,
        test_framework: TestFramework,
        pkg: &PackageMeta,
    ) -> Self {
        RenderContext {
            site_name: decisions.site_name.clone(),
            site_slug: slugify(&decisions.site_name),
            include_bourbon: decisions.include_bourbon,
            include_modernizr: decisions.include_modernizr,
            include_grid: decisions.include_grid,
            include_icon_font: decisions.include_icon_font(),
            icon_font: decisions.icon_font.map(|f| f.id().to_string()),
            icon_font_package: decisions.icon_font.map(|f| f.bower_package().to_string()),
            include_web_font: decisions.include_web_font(),
            web_font: decisions.web_font.map(|f| f.id().to_string()),
            test_framework: test_framework.to_string(),
            pkg: PkgCtx {
                name: pkg.name.clone(),
                version: pkg.version.clone(),
            },
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

/// Lowercase ASCII alphanumerics joined by single dashes; `"app"` if nothing
/// usable remains.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() {
        "app".to_string()
    } else {
        slug
    }
}
