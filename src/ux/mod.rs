use colored::Colorize;

use crate::catalog;
use crate::render::{self, LineKind};
use crate::state::FormState;

pub fn show_prompt(prompt: &str, state: &FormState) {
    println!(
        "\n{}",
        "┏━━━━━━━━━━━━━━━━━━ 프롬프트 미리보기 ━━━━━━━━━━━━━━━━━━┓".bold()
    );
    println!("{prompt}");
    println!(
        "{}",
        "┗━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━┛".bold()
    );
    if let Some(attachment) = &state.attachment {
        println!("{} {} 포함됨", "[첨부]".cyan().bold(), attachment.file_name);
    }
}

pub fn notice_oversized(file_name: &str, bytes: u64) {
    println!(
        "{} {} ({bytes} bytes) 권장 최대 10MB를 넘습니다",
        "notice:".yellow().bold(),
        file_name
    );
}

pub fn show_share_link(link: &str, copied: bool) {
    if copied {
        println!("\n{} {link}", "링크 복사됨!".green().bold());
    } else {
        println!("\n{} {link}", "설정 공유:".bold());
    }
}

pub fn show_catalog() {
    println!("\n{}", "대상 부서".bold());
    for (id, label) in catalog::DEPARTMENTS {
        println!("  {label} ({id})");
    }
    println!("\n{}", "설교 횟수".bold());
    for option in catalog::FREQUENCY_OPTIONS {
        println!("  {option}");
    }
    println!("\n{}", "설교 시간".bold());
    for option in catalog::SERMON_TIME_OPTIONS {
        println!("  {option}");
    }
    println!("\n{}", "설교 분류".bold());
    for option in catalog::SERMON_TYPES {
        println!("  {option}");
    }
}

pub fn show_plan(text: &str) {
    println!("\n{}", "=== AI 생성 결과 ===".bold());
    for (kind, line) in render::parse(text) {
        match kind {
            LineKind::Heading => println!("{}", render::heading_text(line).bold().underline()),
            LineKind::Emphasis => println!("{}", line.replace("**", "").bold()),
            LineKind::TableRow => println!("{}", line.cyan()),
            LineKind::Plain => println!("{line}"),
        }
    }
    println!();
}

pub fn show_error(message: &str) {
    eprintln!("\n{} {message}", "오류가 발생했습니다:".red().bold());
}
