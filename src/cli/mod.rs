use std::path::PathBuf;

use clap::Parser;

use crate::catalog;
use crate::state::{FormUpdate, FrequencyMode};

#[derive(Parser, Debug)]
#[command(
    name = "sermon-planner",
    version,
    about = "설교 계획 프롬프트를 조립하고 Gemini로 설교 계획서를 생성합니다"
)]
pub struct Args {
    /// 대상 부서: label 또는 id (예: "고등부", "high")
    #[arg(long)]
    pub department: Option<String>,

    /// 설교 횟수/기간: 프리셋 또는 자유 입력 (예: "4주 (1개월)")
    #[arg(long)]
    pub frequency: Option<String>,

    /// 기간 메모 (공유 링크로만 전달되는 필드)
    #[arg(long)]
    pub period: Option<String>,

    /// 설교 시간 (예: "20분")
    #[arg(long)]
    pub sermon_time: Option<String>,

    /// 설교 분류 (예: "주제설교")
    #[arg(long)]
    pub sermon_type: Option<String>,

    /// 세부 사항
    #[arg(long)]
    pub details: Option<String>,

    /// 핵심 주제/키워드
    #[arg(long)]
    pub core_theme: Option<String>,

    /// 참고 성경 범위 (선택)
    #[arg(long)]
    pub scripture: Option<String>,

    /// 기타 요청사항
    #[arg(long)]
    pub direction: Option<String>,

    /// 공유 링크(또는 쿼리 문자열)로 폼을 채운 뒤 위 플래그로 덮어씁니다
    #[arg(long)]
    pub from_url: Option<String>,

    /// 참고 자료 PDF 경로
    #[arg(long)]
    pub attach: Option<PathBuf>,

    /// 현재 설정의 공유 링크를 출력합니다
    #[arg(long, default_value_t = false)]
    pub share: bool,

    /// 공유 링크를 클립보드에 복사합니다 (--share 포함)
    #[arg(long, default_value_t = false)]
    pub copy: bool,

    /// 선택 가능한 옵션 목록을 출력합니다
    #[arg(long, default_value_t = false)]
    pub list_options: bool,

    /// Gemini API를 호출해 설교 계획을 생성합니다
    #[arg(long, default_value_t = false)]
    pub generate: bool,

    #[arg(long, default_value = "gemini-2.5-flash")]
    pub model: String,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    #[arg(long, default_value = ".sermon")]
    pub artifacts_dir: String,

    #[arg(long, default_value_t = true)]
    pub save_request: bool,

    #[arg(long, default_value_t = true)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// Field-producing boundary for flag input: resolves department ids to
    /// labels and pins the frequency mode once, by catalog membership.
    pub fn form_update(&self) -> FormUpdate {
        let mut update = FormUpdate::default();

        if let Some(department) = &self.department {
            update.department = Some(
                catalog::department_label(department)
                    .map(str::to_string)
                    .unwrap_or_else(|| department.clone()),
            );
        }
        if let Some(frequency) = &self.frequency {
            update.frequency_mode = Some(if catalog::is_frequency_preset(frequency) {
                FrequencyMode::Preset
            } else {
                FrequencyMode::Custom
            });
            update.frequency = Some(frequency.clone());
        }
        update.period = self.period.clone();
        update.sermon_type = self.sermon_type.clone();
        update.sermon_time = self.sermon_time.clone();
        update.details = self.details.clone();
        update.core_theme = self.core_theme.clone();
        update.scripture = self.scripture.clone();
        update.direction = self.direction.clone();

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("sermon-planner").chain(argv.iter().copied()))
    }

    #[test]
    fn department_ids_resolve_to_labels() {
        let update = args(&["--department", "high"]).form_update();
        assert_eq!(update.department.as_deref(), Some("고등부"));
    }

    #[test]
    fn unknown_departments_pass_through_verbatim() {
        let update = args(&["--department", "온라인부"]).form_update();
        assert_eq!(update.department.as_deref(), Some("온라인부"));
    }

    #[test]
    fn frequency_mode_follows_catalog_membership() {
        let preset = args(&["--frequency", "1주 (단 회)"]).form_update();
        assert_eq!(preset.frequency_mode, Some(FrequencyMode::Preset));

        let custom = args(&["--frequency", "특별 새벽기도회 5일"]).form_update();
        assert_eq!(custom.frequency_mode, Some(FrequencyMode::Custom));
    }

    #[test]
    fn absent_flags_produce_no_update() {
        let update = args(&[]).form_update();
        assert!(update.department.is_none());
        assert!(update.frequency.is_none());
        assert!(update.frequency_mode.is_none());
        assert!(update.direction.is_none());
    }
}
