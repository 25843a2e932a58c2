use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent: Color32,
    pub success: Color32,
    pub error: Color32,
    pub info: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(14, 17, 23),
        bg_secondary: Color32::from_rgb(24, 27, 34),
        bg_tertiary: Color32::from_rgb(38, 41, 50),
        panel_outline: Color32::from_rgb(52, 56, 66),
        text_primary: Color32::from_rgb(226, 229, 235),
        text_muted: Color32::from_rgb(150, 156, 168),
        accent: Color32::from_rgb(255, 75, 75),
        success: Color32::from_rgb(33, 195, 84),
        error: Color32::from_rgb(255, 75, 75),
        info: Color32::from_rgb(28, 131, 225),
        warning: Color32::from_rgb(255, 189, 69),
    }
}

/// Semantic tone of a callout box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Error,
    Info,
    Warning,
}

/// Foreground/background pair for a tone.
pub fn tone_colors(tone: StatusTone) -> (Color32, Color32) {
    let palette = palette();
    let accent = match tone {
        StatusTone::Success => palette.success,
        StatusTone::Error => palette.error,
        StatusTone::Info => palette.info,
        StatusTone::Warning => palette.warning,
    };
    (accent, accent.gamma_multiply(0.18))
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_primary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.extreme_bg_color = palette.bg_secondary;
    visuals.faint_bg_color = palette.bg_secondary;
    visuals.error_fg_color = palette.error;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.bg_tertiary;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rounded(&mut visuals.widgets.inactive, palette);
    set_rounded(&mut visuals.widgets.hovered, palette);
    set_rounded(&mut visuals.widgets.active, palette);
    set_rounded(&mut visuals.widgets.open, palette);
    visuals.popup_shadow = Shadow::NONE;
    visuals.button_frame = true;
}

fn set_rounded(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::same(6);
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.bg_secondary;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn sidebar_fill() -> Color32 {
    palette().bg_secondary
}

pub fn muted_text() -> Color32 {
    palette().text_muted
}

pub fn primary_button_fill() -> Color32 {
    palette().accent
}
