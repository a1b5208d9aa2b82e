use crate::surface::{ElementId, RetainedSurface, Surface};

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn write_element(out: &mut String, surface: &RetainedSurface, id: ElementId, depth: usize) {
    let indent = "  ".repeat(depth);
    let style = surface.style_text(id);
    if style.is_empty() {
        out.push_str(&format!("{indent}<div>"));
    } else {
        out.push_str(&format!(r#"{indent}<div style="{}">"#, escape_attr(&style)));
    }
    let children = surface.children(id);
    if children.is_empty() {
        out.push_str("</div>\n");
        return;
    }
    out.push('\n');
    for child in children {
        write_element(out, surface, *child, depth + 1);
    }
    out.push_str(&format!("{indent}</div>\n"));
}

pub fn to_html(surface: &RetainedSurface) -> String {
    let mut out = String::new();
    for child in surface.children(surface.root()) {
        write_element(&mut out, surface, *child, 0);
    }
    out
}

pub fn to_html_document(surface: &RetainedSurface) -> String {
    let rect = surface.root_rect();
    let mut body = String::new();
    for line in to_html(surface).lines() {
        body.push_str("    ");
        body.push_str(line);
        body.push('\n');
    }
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n</head>\n<body>\n  \
         <div style=\"position:relative;width:{}px;height:{}px;\">\n{body}  </div>\n</body>\n</html>\n",
        rect.width, rect.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::LineManager;
    use crate::model::{LineArgs, Rect};

    #[test]
    fn flat_markup() {
        let mut m = LineManager::new(RetainedSurface::new(Rect::new(0.0, 0.0, 50.0, 50.0)));
        m.add_line(
            LineArgs::position(0.0, 0.0, 0.0, 0.0)
                .with_movable(false)
                .with_show_vertices(false),
        );
        assert_eq!(
            to_html(m.surface()),
            "<div style=\"position:absolute;border-top:1px solid #000;width:0px;height:0;\
             transform:rotate(3.141592653589793rad);left:0px;top:0px;\
             backface-visibility:hidden;\"></div>\n"
        );
    }

    #[test]
    fn wrapped_markup_nests_and_escapes() {
        let mut m = LineManager::new(RetainedSurface::default());
        m.line_container_div = true;
        m.add_line(LineArgs::position(0.0, 0.0, 10.0, 0.0).with_color("\"x\""));
        let html = to_html(m.surface());
        assert!(html.starts_with("<div>\n  <div style="));
        assert!(html.contains("&quot;x&quot;"));
        assert_eq!(html.matches("<div").count(), 4);
        assert!(html.ends_with("</div>\n</div>\n"));
    }

    #[test]
    fn document_wraps_container() {
        let s = RetainedSurface::new(Rect::new(0.0, 0.0, 320.0, 240.0));
        let doc = to_html_document(&s);
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("width:320px;height:240px;"));
    }
}
