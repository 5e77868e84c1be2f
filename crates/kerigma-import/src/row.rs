//! Per-row validation and coercion into person records.

use kerigma_ingest::HeaderMap;
use kerigma_ingest::text::normalize_key;
use kerigma_model::{CanonicalField, PersonRecord, Situacao, TipoPessoa};

use crate::dates::{ISO_DATE, parse_birth_date};
use crate::email::{GENERATED_EMAIL_NOTE, is_valid_email, placeholder_email};
use crate::error::RowError;

/// Spiritual stage assigned when the source says nothing.
const DEFAULT_ESTADO_ESPIRITUAL: &str = "interessado";

/// Type assumed when the source says nothing; still normalized like input.
const DEFAULT_TIPO_PESSOA: &str = "membro";

/// Builds a person record from one split row.
///
/// Cells bind positionally through `headers`; unmapped columns and empty
/// cells are skipped (a later duplicate column overwrites an earlier one).
/// Validation is deliberately asymmetric: only the name can fail the row —
/// every other field degrades softly (placeholder email, null date,
/// omitted enum) so one bad cell never costs the whole person.
pub fn build_person(cells: &[String], headers: &HeaderMap) -> Result<PersonRecord, RowError> {
    let mut draft = RowDraft::default();
    for (index, cell) in cells.iter().enumerate() {
        let Some(field) = headers.field_at(index) else {
            continue;
        };
        let value = cell.trim();
        if value.is_empty() {
            continue;
        }
        draft.set(field, value);
    }
    draft.into_person()
}

/// One row's raw values keyed by canonical field, prior to coercion.
///
/// The struct itself is the column whitelist: there is nowhere for an
/// unrecognized column to land.
#[derive(Debug, Default)]
struct RowDraft {
    nome_completo: Option<String>,
    email: Option<String>,
    telefone: Option<String>,
    tipo_pessoa: Option<String>,
    situacao: Option<String>,
    estado_espiritual: Option<String>,
    data_nascimento: Option<String>,
    endereco: Option<String>,
    estado_civil: Option<String>,
    escolaridade: Option<String>,
    observacoes: Option<String>,
}

impl RowDraft {
    fn set(&mut self, field: CanonicalField, value: &str) {
        let slot = match field {
            CanonicalField::NomeCompleto => &mut self.nome_completo,
            CanonicalField::Email => &mut self.email,
            CanonicalField::Telefone => &mut self.telefone,
            CanonicalField::TipoPessoa => &mut self.tipo_pessoa,
            CanonicalField::Situacao => &mut self.situacao,
            CanonicalField::EstadoEspiritual => &mut self.estado_espiritual,
            CanonicalField::DataNascimento => &mut self.data_nascimento,
            CanonicalField::Endereco => &mut self.endereco,
            CanonicalField::EstadoCivil => &mut self.estado_civil,
            CanonicalField::Escolaridade => &mut self.escolaridade,
            CanonicalField::Observacoes => &mut self.observacoes,
        };
        *slot = Some(value.to_string());
    }

    fn into_person(self) -> Result<PersonRecord, RowError> {
        let nome_completo = self
            .nome_completo
            .filter(|name| name.chars().count() >= 2)
            .ok_or(RowError::InvalidName)?;

        let mut observacoes = self.observacoes;
        let email = match self.email {
            Some(email) if is_valid_email(&email) => email,
            _ => {
                observacoes = Some(match observacoes {
                    Some(existing) => format!("{existing} | {GENERATED_EMAIL_NOTE}"),
                    None => GENERATED_EMAIL_NOTE.to_string(),
                });
                placeholder_email(&nome_completo)
            }
        };

        let tipo_pessoa =
            parse_tipo_pessoa(self.tipo_pessoa.as_deref().unwrap_or(DEFAULT_TIPO_PESSOA));
        let situacao = self.situacao.as_deref().and_then(parse_situacao);
        let estado_espiritual = self
            .estado_espiritual
            .unwrap_or_else(|| DEFAULT_ESTADO_ESPIRITUAL.to_string());
        let data_nascimento = self
            .data_nascimento
            .as_deref()
            .and_then(parse_birth_date)
            .map(|date| date.format(ISO_DATE).to_string());

        Ok(PersonRecord {
            nome_completo,
            email,
            telefone: self.telefone,
            tipo_pessoa,
            situacao,
            estado_espiritual,
            data_nascimento,
            endereco: self.endereco,
            estado_civil: self.estado_civil,
            escolaridade: self.escolaridade,
            observacoes,
        })
    }
}

/// Maps free-text person types onto the fixed set, when recognizable.
///
/// Unrecognized values yield `None` so the store default applies —
/// guessing a type would be worse than omitting it.
fn parse_tipo_pessoa(raw: &str) -> Option<TipoPessoa> {
    match normalize_key(raw).as_str() {
        "membro" | "membros" | "member" => Some(TipoPessoa::Membro),
        "visitante" | "visitantes" | "visita" | "convidado" | "convidada" => {
            Some(TipoPessoa::Visitante)
        }
        "pastor" | "pastora" | "pr" | "pra" | "reverendo" => Some(TipoPessoa::Pastor),
        "lider" | "lideranca" | "coordenador" | "coordenadora" | "diretor" | "diretora" => {
            Some(TipoPessoa::Lider)
        }
        _ => None,
    }
}

/// Accepts only the two literal status values.
fn parse_situacao(raw: &str) -> Option<Situacao> {
    match normalize_key(raw).as_str() {
        "ativo" => Some(Situacao::Ativo),
        "inativo" => Some(Situacao::Inativo),
        _ => None,
    }
}
