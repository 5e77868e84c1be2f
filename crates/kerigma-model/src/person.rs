use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of destination columns an import can populate.
/// Header synonyms resolve onto these; everything else is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CanonicalField {
    NomeCompleto,
    Email,
    Telefone,
    TipoPessoa,
    Situacao,
    EstadoEspiritual,
    DataNascimento,
    Endereco,
    EstadoCivil,
    Escolaridade,
    Observacoes,
}

impl CanonicalField {
    /// Every canonical field, in destination-schema order.
    pub const ALL: [CanonicalField; 11] = [
        CanonicalField::NomeCompleto,
        CanonicalField::Email,
        CanonicalField::Telefone,
        CanonicalField::TipoPessoa,
        CanonicalField::Situacao,
        CanonicalField::EstadoEspiritual,
        CanonicalField::DataNascimento,
        CanonicalField::Endereco,
        CanonicalField::EstadoCivil,
        CanonicalField::Escolaridade,
        CanonicalField::Observacoes,
    ];

    /// Returns the destination column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::NomeCompleto => "nome_completo",
            CanonicalField::Email => "email",
            CanonicalField::Telefone => "telefone",
            CanonicalField::TipoPessoa => "tipo_pessoa",
            CanonicalField::Situacao => "situacao",
            CanonicalField::EstadoEspiritual => "estado_espiritual",
            CanonicalField::DataNascimento => "data_nascimento",
            CanonicalField::Endereco => "endereco",
            CanonicalField::EstadoCivil => "estado_civil",
            CanonicalField::Escolaridade => "escolaridade",
            CanonicalField::Observacoes => "observacoes",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of person, mapped from free-text spreadsheet values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoPessoa {
    Membro,
    Visitante,
    Pastor,
    Lider,
}

impl TipoPessoa {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoPessoa::Membro => "membro",
            TipoPessoa::Visitante => "visitante",
            TipoPessoa::Pastor => "pastor",
            TipoPessoa::Lider => "lider",
        }
    }
}

impl fmt::Display for TipoPessoa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership status. Only the two literal values are ever accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Situacao {
    Ativo,
    Inativo,
}

impl Situacao {
    pub fn as_str(&self) -> &'static str {
        match self {
            Situacao::Ativo => "ativo",
            Situacao::Inativo => "inativo",
        }
    }
}

impl fmt::Display for Situacao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized person record, ready for insertion.
///
/// Optional enum fields are skipped during serialization when unset so the
/// destination schema's own defaults apply; `data_nascimento` serializes as
/// an explicit `null` when the source date was absent or unparseable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Full name, trimmed, at least two characters.
    pub nome_completo: String,
    /// Validated address or a synthesized placeholder.
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_pessoa: Option<TipoPessoa>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub situacao: Option<Situacao>,
    /// Defaults to "interessado" for imported people.
    pub estado_espiritual: String,
    /// ISO `YYYY-MM-DD`.
    pub data_nascimento: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estado_civil: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escolaridade: Option<String>,
    /// Free-form notes; annotated when the email was synthesized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}
