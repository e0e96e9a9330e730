// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it;
// this file only holds what every call has in common.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "Responda exclusivamente com um objeto JSON válido. \
    Não inclua texto fora do objeto JSON. \
    Não use blocos de código markdown. \
    Não inclua explicações nem desculpas.";

/// Appended to every prompt that produces résumé content.
pub const FACTUALITY_INSTRUCTION: &str = "\
    IMPORTANTE: use apenas fatos presentes nas informações fornecidas. \
    Não invente empresas, cargos, datas, notas ou tecnologias. \
    Se uma informação não foi fornecida, omita o campo ou deixe a lista vazia.";

/// Builds a system prompt from a role description plus the JSON-only fragment.
pub fn system_prompt(role: &str) -> String {
    format!("{role} {JSON_ONLY_SYSTEM}")
}
