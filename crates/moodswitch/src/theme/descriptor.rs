//! Theme descriptor for a single mood.

use serde::Serialize;

use crate::color::{Color, GradientSpec};
use crate::mood::AnimationKind;

/// The bundle of visual attributes associated with one mood.
///
/// Descriptors are built once when the registry is created and are only
/// ever handed out by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    /// Fill color of the mood's selector control.
    pub primary_color: Color,
    pub secondary_color: Color,
    /// Background of the content display.
    pub background: GradientSpec,
    /// Foreground used both on the control and in the content display.
    pub text_color: Color,
    pub animation_kind: AnimationKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let descriptor = ThemeDescriptor {
            primary_color: Color::from_hex(0x8E44AD),
            secondary_color: Color::from_hex(0x9B59B6),
            background: GradientSpec::new(
                135,
                Color::from_hex(0x34495E),
                Color::from_hex(0x2C3E50),
            ),
            text_color: Color::from_hex(0xECF0F1),
            animation_kind: AnimationKind::SlowFade,
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "primaryColor": "#8E44AD",
                "secondaryColor": "#9B59B6",
                "background": "linear-gradient(135deg, #34495E, #2C3E50)",
                "textColor": "#ECF0F1",
                "animationKind": "slowFade",
            })
        );
    }
}
