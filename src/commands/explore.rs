//! # explore 子命令实现
//!
//! 终端中的交互式浏览：先选晶系，再选该晶系的滑移面。
//! 每次选择都从头执行完整流程（单胞图 + 滑移面图），输入 `q` 退出。
//!
//! ## 依赖关系
//! - 使用 `cli/page.rs` 定义的 ExploreArgs
//! - 使用 `console` 输出菜单，从标准输入读取选择
//! - 使用 `view/` 计算视图, `commands/plot.rs` 保存图像

use crate::cli::page::ExploreArgs;
use crate::cli::plot::PlotFormat;
use crate::commands::plot::{plane_file_name, save, structure_file_name};
use crate::error::{Result, SlipvizError};
use crate::models::CrystalSystem;
use crate::render::Plot;
use crate::utils::output;
use crate::view::page::{plane_prompt, SYSTEM_PROMPT};
use crate::view::{render_view, Selection, View};

use colored::Colorize;
use console::Term;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// 用户的一次输入
#[derive(Debug, PartialEq, Eq)]
enum Choice {
    Quit,
    Pick(String),
}

/// 执行 explore 子命令
pub fn execute(args: ExploreArgs) -> Result<()> {
    output::print_header("Crystal Plasticity Visualizer");
    output::print_info("Explore BCC and FCC crystal systems and their slip planes.");
    output::print_info("Enter a number or a name; 'q' quits.");

    fs::create_dir_all(&args.output_dir).map_err(|e| SlipvizError::FileWriteError {
        path: args.output_dir.display().to_string(),
        source: e,
    })?;

    let term = Term::stdout();
    let system_names: Vec<&str> = CrystalSystem::ALL.iter().map(|s| s.name()).collect();

    loop {
        let system = match prompt(&term, SYSTEM_PROMPT, &system_names)? {
            Choice::Quit => break,
            Choice::Pick(name) => match CrystalSystem::from_name(&name) {
                Some(system) => system,
                None => {
                    output::print_warning(&format!("Unknown crystal system '{}'", name));
                    continue;
                }
            },
        };

        let labels = system.slip_labels();
        let label = match prompt(&term, &plane_prompt(system), &labels)? {
            Choice::Quit => break,
            Choice::Pick(label) => label,
        };

        let view = render_view(&Selection::new(system).with_plane(label));
        write_view(&view, &args.output_dir, args.format, args.size.width, args.size.height)?;
        output::print_separator();
    }

    output::print_done("Bye");
    Ok(())
}

/// 保存视图的两张图；滑移面无效时只输出错误信息
fn write_view(view: &View, dir: &Path, format: PlotFormat, width: u32, height: u32) -> Result<()> {
    let system = view.selection.system;

    let cell_path = dir.join(structure_file_name(system, format));
    save(&Plot::Structure(view.structure.clone()), &cell_path, format, width, height)?;
    output::print_success(&format!(
        "{} -> '{}'",
        view.structure.title,
        cell_path.display()
    ));

    match &view.plane {
        Ok(plane) => {
            let plane_path =
                dir.join(plane_file_name(system, view.selection.plane_label(), format));
            save(&Plot::Plane(plane.clone()), &plane_path, format, width, height)?;
            output::print_success(&format!("{} -> '{}'", plane.title, plane_path.display()));
        }
        Err(e) => output::print_error(&e.detail()),
    }

    Ok(())
}

/// 显示编号菜单并从标准输入读取一行
fn prompt(term: &Term, title: &str, options: &[&str]) -> Result<Choice> {
    term.write_line(&title.bold().to_string())
        .map_err(SlipvizError::TerminalError)?;
    for (i, option) in options.iter().enumerate() {
        term.write_line(&format!("  {} {}", format!("{})", i + 1).cyan(), option))
            .map_err(SlipvizError::TerminalError)?;
    }
    term.write_str("> ").map_err(SlipvizError::TerminalError)?;

    let choice = read_choice(&mut io::stdin().lock(), options)?;
    if choice == Choice::Quit {
        term.write_line("").map_err(SlipvizError::TerminalError)?;
    }
    Ok(choice)
}

/// 读取一行输入；输入流结束 (EOF) 视为退出
fn read_choice<R: BufRead>(reader: &mut R, options: &[&str]) -> Result<Choice> {
    let mut line = String::new();
    match reader.read_line(&mut line).map_err(SlipvizError::TerminalError)? {
        0 => Ok(Choice::Quit),
        _ => Ok(parse_choice(&line, options)),
    }
}

/// 解析输入：编号映射到选项，其他内容原样返回
fn parse_choice(input: &str, options: &[&str]) -> Choice {
    let input = input.trim();
    if input.eq_ignore_ascii_case("q") || input.eq_ignore_ascii_case("quit") {
        return Choice::Quit;
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=options.len()).contains(&n) => Choice::Pick(options[n - 1].to_string()),
        _ => Choice::Pick(input.to_string()),
    }
}
