use crate::state::FormState;

/// Placeholder for basic/content fields left empty.
pub const UNSPECIFIED: &str = "미지정";
/// Placeholder for an empty direction/other-requests field.
pub const NONE_GIVEN: &str = "없음";

fn or_unspecified(value: &str) -> &str {
    if value.is_empty() {
        UNSPECIFIED
    } else {
        value
    }
}

/// Render the full request prompt for the current form state.
///
/// Sections: role preamble, basic info, content and direction, an optional
/// reference-material section (attachment only), and the output-format
/// closing section whose ordinal shifts from 3 to 4 when the reference
/// section is present. Omitted optional lines contribute zero characters;
/// the result is trimmed.
pub fn compile(state: &FormState) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# 설교 계획 작성 요청".into());
    lines.push(String::new());
    lines.push("**역할:**".into());
    lines.push("1. 당신은 기독교대한성결교회의 목회자입니다.".into());
    lines.push("2. 당신은 부교역자로서 담임목사님의 목회를 돕는 사람입니다.".into());
    lines.push(String::new());
    lines.push("**목표:** 다음 정보를 바탕으로 체계적이고 은혜로운 **설교 계획서**를 작성해 주세요.".into());
    lines.push(String::new());

    lines.push("## 1. 기본 정보".into());
    lines.push(format!("- **대상:** {}", or_unspecified(&state.department)));
    lines.push(format!("- **설교 횟수/기간:** {}", or_unspecified(&state.frequency)));
    lines.push(format!("- **설교 시간:** {}", or_unspecified(&state.sermon_time)));
    lines.push(String::new());

    lines.push("## 2. 내용 및 방향".into());
    lines.push(format!("- **설교 분류:** {}", or_unspecified(&state.sermon_type)));
    lines.push(format!("- **세부 사항:** {}", or_unspecified(&state.details)));
    lines.push(format!("- **핵심 주제/키워드:** {}", or_unspecified(&state.core_theme)));
    if !state.scripture.is_empty() {
        lines.push(format!("- **참고 성경 범위:** {}", state.scripture));
    }
    let direction = if state.direction.is_empty() {
        NONE_GIVEN
    } else {
        state.direction.as_str()
    };
    lines.push(format!("- **기타 요청사항:** {direction}"));
    lines.push(String::new());

    if let Some(attachment) = &state.attachment {
        lines.push("## 3. 참고 자료".into());
        lines.push(format!("[첨부된 PDF 파일: {}]", attachment.file_name));
        lines.push("이 파일의 내용을 분석하여 설교 계획에 반영해주세요.".into());
        lines.push(String::new());
    }

    let closing = if state.attachment.is_some() { 4 } else { 3 };
    lines.push(format!("## {closing}. 요청 결과물 형식 및 조건"));
    lines.push("반드시 아래와 같은 **표(Table)** 형식으로 작성해주세요.".into());
    lines.push(String::new());
    lines.push("| 주차 | 날짜(월/주) | 설교 제목 | 성경 본문 | 핵심 주제 (One Message) | 2부 활동/적용 아이디어 |".into());
    lines.push("|:---:|:---:|---|---|---|---|".into());
    lines.push("| 1주 | 1월 1주 | ... | ... | ... | ... |".into());
    lines.push(String::new());
    lines.push("### 추가 요청사항".into());
    lines.push("1. **구체적 구성**: 단순한 나열이 아니라, 설교의 흐름이 이어지도록 구성해주세요.".into());
    lines.push("2. **적용점 포함**: 삶에 실제적으로 적용할 수 있는 포인트(Application)를 포함해주세요.".into());
    lines.push("3. **활동 제안**: 설교 후 2부 순서나 분반 공부에서 할 수 있는 간단한 활동 아이디어를 포함해주세요.".into());

    lines.join("\n").trim().to_string()
}
