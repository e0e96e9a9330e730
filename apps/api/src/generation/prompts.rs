// Prompt templates for the content generation service.
// Placeholders in `{braces}` are replaced by the builders in `service.rs`.

pub const RESUME_WRITER_ROLE: &str =
    "Você é um especialista em criação de currículos para estudantes universitários brasileiros.";

pub const CAREER_ADVISOR_ROLE: &str =
    "Você é um consultor de carreira especializado em estudantes universitários.";

/// Shape every résumé-producing call must return.
pub const RESUME_JSON_SHAPE: &str = r#"{
  "personalInfo": { "name": "", "email": "", "phone": "", "location": "", "linkedIn": "", "github": "" },
  "summary": "",
  "education": [ { "institution": "", "degree": "", "field": "", "graduationYear": "", "gpa": "" } ],
  "experience": [ { "title": "", "company": "", "duration": "", "description": [""] } ],
  "projects": [ { "name": "", "description": "", "technologies": [""], "link": "" } ],
  "skills": { "technical": [""], "languages": [""], "tools": [""] }
}"#;

pub const GENERATE_PROMPT_TEMPLATE: &str = r#"Crie um currículo profissional em português a partir das informações do estudante.

INFORMAÇÕES DO ESTUDANTE:
- Nome: {full_name}
- Email: {email}
- Telefone: {phone}
- Universidade: {university}
- Curso: {course}
- Habilidades: {skills}
- Projeto relevante: {relevant_project}
{job_section}
INSTRUÇÕES:
1. Escreva um resumo profissional de 2 a 3 frases destacando o potencial do estudante.
2. Organize as habilidades em técnicas, ferramentas e idiomas.
3. Descreva o projeto com linguagem de impacto e liste as tecnologias mencionadas.
4. Use verbos de ação e linguagem profissional.
{factuality}

Retorne um JSON exatamente neste formato:
{shape}"#;

pub const JOB_SECTION_TEMPLATE: &str = r#"
VAGA ALVO (priorize habilidades e experiências relevantes para ela):
{job_description}
"#;

pub const TAILOR_PROMPT_TEMPLATE: &str = r#"Adapte o currículo abaixo para a vaga descrita.

CURRÍCULO ATUAL:
{resume_json}

DESCRIÇÃO DA VAGA:
{job_description}

INSTRUÇÕES:
1. Reescreva o resumo profissional com foco nos requisitos da vaga.
2. Reordene habilidades e projetos, colocando primeiro os mais relevantes.
3. Use palavras-chave da vaga quando forem verdadeiras para o candidato.
4. Mantenha exatamente os mesmos dados pessoais (nome, email, telefone, links).
{factuality}

Retorne um JSON exatamente neste formato:
{shape}"#;

pub const SUGGESTIONS_PROMPT_TEMPLATE: &str = r#"Analise o perfil do estudante e sugira melhorias concretas para o currículo.

PERFIL:
{profile_json}

Sugira de 3 a 6 ações específicas: habilidades a desenvolver, projetos a documentar,
certificações ou experiências que fortaleceriam o currículo.

Retorne um JSON no formato:
{ "suggestions": ["sugestão 1", "sugestão 2"] }"#;
