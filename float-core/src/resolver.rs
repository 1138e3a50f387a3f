//! Answer resolution: [`AnswerSet`] → [`FeatureDecisionSet`].
//!
//! Membership is an explicit set test on parsed [`Feature`]s, so a gating
//! feature counts as selected wherever it appears in the list. Dependent font
//! choices are read only when their gating feature is selected and must then
//! parse into the closed enum.

use std::str::FromStr;

use crate::error::ResolveError;
use crate::types::{AnswerSet, Feature, FeatureDecisionSet, IconFont, WebFont};

/// Resolve raw answers into feature decisions. Pure; no side effects.
pub fn resolve(answers: &AnswerSet) -> Result<FeatureDecisionSet, ResolveError> {
    let features = answers.known_features();
    let has = |f: Feature| features.contains(&f);

    let icon_font = if has(Feature::IconFont) {
        Some(dependent_choice(
            Feature::IconFont,
            answers.which_icon_font.as_deref(),
            IconFont::all().iter().map(IconFont::id),
        )?)
    } else {
        None
    };

    let web_font = if has(Feature::WebFont) {
        Some(dependent_choice(
            Feature::WebFont,
            answers.which_web_font.as_deref(),
            WebFont::all().iter().map(WebFont::id),
        )?)
    } else {
        None
    };

    Ok(FeatureDecisionSet {
        site_name: answers.site_name.trim().to_string(),
        include_bourbon: answers.include_bourbon,
        include_modernizr: has(Feature::Modernizr),
        include_grid: has(Feature::Grid),
        icon_font,
        web_font,
    })
}

fn dependent_choice<T: FromStr>(
    feature: Feature,
    choice: Option<&str>,
    expected: impl Iterator<Item = &'static str>,
) -> Result<T, ResolveError> {
    choice
        .and_then(|c| c.parse::<T>().ok())
        .ok_or_else(|| ResolveError::InvalidSelection {
            feature,
            choice: choice.map(str::to_string),
            expected: expected.collect(),
        })
}
