//! # HTML 页面生成
//!
//! 把视图渲染成单个自包含的 HTML 页面：标题、说明文字、
//! 晶系下拉框、对应晶系的滑移面下拉框，以及两张内嵌 SVG 图。
//!
//! 每个 (晶系, 滑移面) 组合都预先经过 `render_view` 完整计算；
//! 页面脚本只负责切换显示哪一个视图。
//!
//! ## 依赖关系
//! - 被 `commands/page.rs` 调用
//! - 使用 `view/selection.rs` 的 View, `render/` 生成 SVG

use crate::error::Result;
use crate::models::slip::normalize_label;
use crate::models::CrystalSystem;
use crate::render::{self, Plot};
use crate::view::selection::{Selection, View};

use std::fmt::{self, Write};

pub const PAGE_TITLE: &str = "🔬 Crystal Plasticity Visualizer";
pub const PAGE_DESCRIPTION: &str = "Explore BCC and FCC crystal systems and their slip planes.";
pub const SYSTEM_PROMPT: &str = "Choose crystal system:";

/// 滑移面下拉框提示
pub fn plane_prompt(system: CrystalSystem) -> String {
    format!("Select {} slip plane:", system)
}

/// 视图在页面中的唯一标识，如 `fcc-m1m11`
///
/// 只有表中存在的标签才生成基于标签的标识；其余一律为 `<system>-invalid`，
/// 不会与合法视图重名。
pub fn view_id(system: CrystalSystem, label: &str) -> String {
    let known = normalize_label(label)
        .filter(|normalized| system.slip_labels().contains(&normalized.as_str()));
    let Some(label) = known else {
        return format!("{}-invalid", system.slug());
    };

    let slug: String = label
        .chars()
        .filter_map(|c| match c {
            '-' => Some('m'),
            c if c.is_ascii_alphanumeric() => Some(c),
            _ => None,
        })
        .collect();
    format!("{}-{}", system.slug(), slug)
}

/// 已渲染为 SVG 的视图
#[derive(Debug, Clone)]
pub struct RenderedView {
    pub id: String,
    pub selection: Selection,
    pub plane_options: Vec<&'static str>,
    pub structure_svg: String,
    /// 滑移面 SVG，或显示给用户的错误信息
    pub plane_svg: std::result::Result<String, String>,
}

/// 把视图中的图表渲染为 SVG
pub fn render_svgs(view: View, width: u32, height: u32) -> Result<RenderedView> {
    let structure_svg = render::plot_to_svg(&Plot::Structure(view.structure), width, height)?;

    let plane_svg = match view.plane {
        Ok(plane) => Ok(render::plot_to_svg(&Plot::Plane(plane), width, height)?),
        Err(e) => Err(e.to_string()),
    };

    Ok(RenderedView {
        id: view_id(view.selection.system, view.selection.plane_label()),
        selection: view.selection,
        plane_options: view.plane_options,
        structure_svg,
        plane_svg,
    })
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 960px; margin: 2em auto; color: #262730; }
select { font-size: 1em; padding: 0.3em; margin: 0.3em 0 1em; display: block; }
figure { margin: 0 0 1.5em; }
figure svg { max-width: 100%; height: auto; }
.error { background: #ffe9e9; color: #7d353b; padding: 0.8em 1em; border-radius: 0.4em; }
"#;

const SCRIPT: &str = r#"
const views = document.querySelectorAll('section.view');
function show(id) {
  views.forEach(v => { v.hidden = v.id !== id; });
  const current = document.getElementById(id);
  if (current) {
    document.getElementById('system').value = current.dataset.system;
    current.querySelector('select.plane').value = id;
  }
}
document.getElementById('system').addEventListener('change', e => {
  show(e.target.selectedOptions[0].dataset.default);
});
document.querySelectorAll('select.plane').forEach(s => {
  s.addEventListener('change', e => show(e.target.value));
});
"#;

/// 生成完整页面
///
/// `initial` 对应的视图可见，其余隐藏。
pub fn page_html(views: &[RenderedView], initial: &Selection) -> Result<String> {
    let mut html = String::new();
    write_page(&mut html, views, initial)?;
    Ok(html)
}

fn write_page(html: &mut String, views: &[RenderedView], initial: &Selection) -> fmt::Result {
    let initial_id = view_id(initial.system, initial.plane_label());

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>{}</title>", escape(PAGE_TITLE))?;
    writeln!(html, "<style>{}</style>\n</head>\n<body>", STYLE)?;
    writeln!(html, "<h1>{}</h1>", escape(PAGE_TITLE))?;
    writeln!(html, "<p>{}</p>", escape(PAGE_DESCRIPTION))?;

    writeln!(html, "<label for=\"system\">{}</label>", escape(SYSTEM_PROMPT))?;
    writeln!(html, "<select id=\"system\">")?;
    for system in CrystalSystem::ALL {
        let default_id = view_id(system, system.default_slip_plane().label);
        let selected = if system == initial.system { " selected" } else { "" };
        writeln!(
            html,
            "  <option value=\"{}\" data-default=\"{}\"{}>{}</option>",
            system.slug(),
            default_id,
            selected,
            system
        )?;
    }
    writeln!(html, "</select>")?;

    for view in views {
        write_view(html, view, view.id == initial_id)?;
    }

    writeln!(html, "<script>{}</script>\n</body>\n</html>", SCRIPT)
}

fn write_view(html: &mut String, view: &RenderedView, visible: bool) -> fmt::Result {
    let system = view.selection.system;
    let hidden = if visible { "" } else { " hidden" };

    writeln!(
        html,
        "<section class=\"view\" id=\"{}\" data-system=\"{}\"{}>",
        view.id,
        system.slug(),
        hidden
    )?;
    writeln!(html, "<figure class=\"structure\">{}</figure>", view.structure_svg)?;

    writeln!(html, "<label>{}</label>", escape(&plane_prompt(system)))?;
    writeln!(html, "<select class=\"plane\">")?;
    for label in &view.plane_options {
        let id = view_id(system, label);
        let selected = if id == view.id { " selected" } else { "" };
        writeln!(
            html,
            "  <option value=\"{}\"{}>{}</option>",
            id,
            selected,
            escape(label)
        )?;
    }
    writeln!(html, "</select>")?;

    match &view.plane_svg {
        Ok(svg) => writeln!(html, "<figure class=\"plane\">{}</figure>", svg)?,
        Err(msg) => writeln!(html, "<div class=\"error\">{}</div>", escape(msg))?,
    }
    writeln!(html, "</section>")
}
