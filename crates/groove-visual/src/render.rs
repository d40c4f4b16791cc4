//! SVG assembly

use groove_core::Avatar;

use crate::config::RenderConfig;
use crate::scope::RenderScope;
use crate::skeleton::{Point, Segment, Skeleton, VIEW_BOX};
use crate::timeline::stylesheet;
use crate::Result;

const SHADOW_RX: f64 = 28.0;
const SHADOW_RY: f64 = 5.0;

/// Renders avatars to SVG
#[derive(Debug, Clone, Default)]
pub struct AvatarRenderer {
    config: RenderConfig,
}

impl AvatarRenderer {
    /// Create a renderer, rejecting an invalid config
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active render config
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render at the configured size with the identifier-derived scope
    pub fn render_svg(&self, avatar: &Avatar) -> String {
        self.render_svg_at(avatar, self.config.size)
    }

    /// Render at an explicit pixel size
    pub fn render_svg_at(&self, avatar: &Avatar, size: u32) -> String {
        let scope = RenderScope::for_identifier(avatar.identifier());
        self.render_svg_scoped(avatar, &scope, size)
    }

    /// Render with a caller-chosen scope
    pub fn render_svg_scoped(&self, avatar: &Avatar, scope: &RenderScope, size: u32) -> String {
        // A zero size would make the image invisible; clamp rather than fail.
        let size = size.max(1);
        let skeleton = Skeleton::new(&avatar.physique());
        let color = avatar.color().to_css();
        let css = stylesheet(scope, avatar.poses(), &skeleton, self.config.cycle_seconds());

        tracing::debug!(seed = avatar.seed(), size, scope = %scope, "rendering avatar");

        let background = self
            .config
            .background
            .as_deref()
            .map(|fill| format!("  <rect width=\"{vb}\" height=\"{vb}\" fill=\"{fill}\"/>\n", vb = VIEW_BOX, fill = fill))
            .unwrap_or_default();

        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {vb} {vb}" width="{size}" height="{size}" role="img" aria-label="dancing avatar">
  <style>
{css}  </style>
{background}  <ellipse class="{shadow}" cx="{gx:.2}" cy="{gy:.2}" rx="{rx:.2}" ry="{ry:.2}" fill="#000" fill-opacity="0.2"/>
  <g class="{body}" stroke="{color}" stroke-linecap="round" fill="none">
    {torso}
    <g class="{head}">
      <circle cx="{hx:.2}" cy="{hy:.2}" r="{hr:.2}" fill="{color}" stroke="none"/>
    </g>
{right_arm}{left_arm}{right_leg}{left_leg}  </g>
</svg>
"##,
            vb = VIEW_BOX,
            size = size,
            css = css,
            background = background,
            shadow = scope.name_for(Segment::Shadow),
            gx = skeleton.ground.x,
            gy = skeleton.ground.y,
            rx = SHADOW_RX * avatar.physique().build,
            ry = SHADOW_RY,
            body = scope.name_for(Segment::Body),
            color = color,
            torso = line(skeleton.neck, skeleton.hip_center, skeleton.torso_stroke),
            head = scope.name_for(Segment::Head),
            hx = skeleton.head_center.x,
            hy = skeleton.head_center.y,
            hr = skeleton.head_radius,
            right_arm = limb(scope, &skeleton, Segment::ShoulderRight, Segment::ElbowRight,
                [skeleton.right_shoulder, skeleton.right_elbow, skeleton.right_hand]),
            left_arm = limb(scope, &skeleton, Segment::ShoulderLeft, Segment::ElbowLeft,
                [skeleton.left_shoulder, skeleton.left_elbow, skeleton.left_hand]),
            right_leg = limb(scope, &skeleton, Segment::HipRight, Segment::KneeRight,
                [skeleton.right_hip, skeleton.right_knee, skeleton.right_foot]),
            left_leg = limb(scope, &skeleton, Segment::HipLeft, Segment::KneeLeft,
                [skeleton.left_hip, skeleton.left_knee, skeleton.left_foot]),
        )
    }

    /// An HTML page with every avatar inline, each under its own scope
    pub fn render_gallery(&self, avatars: &[Avatar]) -> String {
        let figures: String = avatars
            .iter()
            .map(|avatar| {
                format!(
                    "<figure>\n{}<figcaption>{} &#183; {}</figcaption>\n</figure>\n",
                    self.render_svg(avatar),
                    escape_text(avatar.identifier()),
                    avatar.style()
                )
            })
            .collect();

        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\"/>\n<title>Groove gallery</title>\n\
             <style>body {{ display: flex; flex-wrap: wrap; gap: 16px; font-family: sans-serif; }} \
             figure {{ margin: 0; text-align: center; }}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            figures
        )
    }
}

fn line(from: Point, to: Point, width: f64) -> String {
    format!(
        r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke-width="{:.2}"/>"#,
        from.x, from.y, to.x, to.y, width
    )
}

/// Upper segment group nesting the lower segment group
fn limb(scope: &RenderScope, skeleton: &Skeleton, upper: Segment, lower: Segment, joints: [Point; 3]) -> String {
    let [root, joint, end] = joints;
    format!(
        "    <g class=\"{upper}\">\n      {upper_line}\n      <g class=\"{lower}\">\n        {lower_line}\n      </g>\n    </g>\n",
        upper = scope.name_for(upper),
        upper_line = line(root, joint, skeleton.limb_stroke),
        lower = scope.name_for(lower),
        lower_line = line(joint, end, skeleton.lower_limb_stroke),
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    use quick_xml::events::{BytesStart, Event};
    use quick_xml::Reader;

    fn check_attributes(tag: &BytesStart) -> std::result::Result<(), String> {
        for attr in tag.attributes() {
            let attr = attr.map_err(|e| e.to_string())?;
            attr.unescape_value().map_err(|e| e.to_string())?;
        }
        Ok(())
    }

    /// Parse as XML: matched end names, valid attributes, escaped text.
    fn well_formed(markup: &str) -> std::result::Result<(), String> {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().check_end_names = true;

        let mut depth = 0usize;
        loop {
            match reader.read_event().map_err(|e| e.to_string())? {
                Event::Start(tag) => {
                    check_attributes(&tag)?;
                    depth += 1;
                }
                Event::Empty(tag) => check_attributes(&tag)?,
                Event::End(_) => depth = depth.checked_sub(1).ok_or("unmatched end tag")?,
                Event::Text(text) => {
                    text.unescape().map_err(|e| e.to_string())?;
                }
                Event::Eof => break,
                _ => {}
            }
        }
        if depth != 0 {
            return Err(format!("{} unclosed elements", depth));
        }
        Ok(())
    }

    fn assert_well_formed(markup: &str) {
        if let Err(e) = well_formed(markup) {
            panic!("malformed markup: {}", e);
        }
    }

    fn render(id: &str) -> String {
        AvatarRenderer::default().render_svg(&Avatar::new(id))
    }

    #[test]
    fn test_render_svg() {
        let svg = render("01ARZ3NDEKTSV4RRFFQ69G5FAV");
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 200 200\""));
        assert!(svg.contains("width=\"200\""));
        assert_well_formed(&svg);
    }

    #[test]
    fn test_one_timeline_per_segment() {
        let svg = render("dancer");
        assert_eq!(svg.matches("@keyframes").count(), Segment::ALL.len());
        assert_eq!(Segment::ALL.len(), 11);

        let scope = RenderScope::for_identifier("dancer");
        for segment in Segment::ALL {
            let name = scope.name_for(segment);
            assert_eq!(svg.matches(&format!("@keyframes {} ", name)).count(), 1);
            assert!(svg.contains(&format!("class=\"{}\"", name)));
        }
    }

    #[test]
    fn test_no_placeholders_or_external_refs() {
        for id in ["", "x", "<b>&\"'", "01ARZ3NDEKTSV4RRFFQ69G5FAV", "\u{1f57a}"] {
            let svg = render(id);
            assert!(!svg.contains("{{") && !svg.contains("}}"));
            assert!(!svg.contains("NaN") && !svg.replace("infinite", "").contains("inf"));
            assert!(!svg.contains("href") && !svg.contains("url(") && !svg.contains("@import"));
            assert_well_formed(&svg);
        }
    }

    #[test]
    fn test_malformed_markup_detected() {
        assert!(well_formed("<svg><g class=unquoted attr\"x><line a=\"1\" a=\"2\"/>&</g></svg>").is_err());
        assert!(well_formed("<svg><line a=\"1\" a=\"2\"/></svg>").is_err());
        assert!(well_formed("<svg><g>&</g></svg>").is_err());
        assert!(well_formed("<svg><g></svg>").is_err());
        assert!(well_formed("<svg><g>").is_err());
        assert!(well_formed("<svg><g class=\"a\">&amp;</g></svg>").is_ok());
    }

    #[test]
    fn test_identifier_never_reaches_markup() {
        let svg = render("<script>alert(1)</script>");
        assert!(!svg.contains("script"));
    }

    #[test]
    fn test_deterministic_render() {
        assert_eq!(render("same"), render("same"));
        assert_ne!(render("same"), render("other"));
    }

    #[test]
    fn test_explicit_size_and_scope() {
        let renderer = AvatarRenderer::default();
        let avatar = Avatar::new("sized");
        let scope = RenderScope::new("hero").unwrap();
        let svg = renderer.render_svg_scoped(&avatar, &scope, 64);
        assert!(svg.contains("width=\"64\" height=\"64\""));
        assert!(svg.contains("@keyframes hero-knee-l {"));
        assert!(svg.contains(&avatar.color().to_css()));
    }

    #[test]
    fn test_cycle_follows_tempo() {
        let renderer = AvatarRenderer::new(RenderConfig { bpm: 60.0, ..RenderConfig::default() }).unwrap();
        let svg = renderer.render_svg(&Avatar::new("slow"));
        assert!(svg.contains(" 8.000s linear infinite"));

        let svg = render("fast");
        assert!(svg.contains(" 4.000s linear infinite"));
    }

    #[test]
    fn test_background() {
        let renderer = AvatarRenderer::new(RenderConfig {
            background: Some("#fafafa".into()),
            ..RenderConfig::default()
        })
        .unwrap();
        let svg = renderer.render_svg(&Avatar::new("bg"));
        assert!(svg.contains("fill=\"#fafafa\""));
        assert_well_formed(&svg);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(AvatarRenderer::new(RenderConfig { size: 0, ..RenderConfig::default() }).is_err());
    }

    #[test]
    fn test_gallery_scopes_do_not_collide() {
        let avatars: Vec<Avatar> = ["a b", "a_b", "<x>"].iter().map(|id| Avatar::new(id)).collect();
        let page = AvatarRenderer::default().render_gallery(&avatars);

        assert_eq!(page.matches("<svg").count(), 3);
        assert_eq!(page.matches("@keyframes").count(), 3 * Segment::ALL.len());
        for avatar in &avatars {
            let scope = RenderScope::for_identifier(avatar.identifier());
            assert_eq!(page.matches(&format!("@keyframes {}-body ", scope)).count(), 1);
        }
        assert!(page.contains("&lt;x&gt;"));
        assert_well_formed(&page);
    }
}
