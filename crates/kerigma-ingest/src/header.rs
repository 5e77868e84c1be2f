//! Header-to-canonical-field resolution.

use kerigma_model::CanonicalField;

use crate::error::{IngestError, Result};
use crate::text::normalize_key;

/// Accepted header spellings, already in [`normalize_key`] form, paired
/// with the canonical field they resolve to.
///
/// Covers the spellings congregation spreadsheets actually use; anything
/// not listed here is silently ignored, column and all.
pub const HEADER_SYNONYMS: &[(&str, CanonicalField)] = &[
    ("nome", CanonicalField::NomeCompleto),
    ("nome completo", CanonicalField::NomeCompleto),
    ("nomecompleto", CanonicalField::NomeCompleto),
    ("name", CanonicalField::NomeCompleto),
    ("email", CanonicalField::Email),
    ("e mail", CanonicalField::Email),
    ("mail", CanonicalField::Email),
    ("correio eletronico", CanonicalField::Email),
    ("telefone", CanonicalField::Telefone),
    ("celular", CanonicalField::Telefone),
    ("whatsapp", CanonicalField::Telefone),
    ("fone", CanonicalField::Telefone),
    ("tel", CanonicalField::Telefone),
    ("contato", CanonicalField::Telefone),
    ("tipo", CanonicalField::TipoPessoa),
    ("tipo pessoa", CanonicalField::TipoPessoa),
    ("tipo de pessoa", CanonicalField::TipoPessoa),
    ("categoria", CanonicalField::TipoPessoa),
    ("funcao", CanonicalField::TipoPessoa),
    ("cargo", CanonicalField::TipoPessoa),
    ("perfil", CanonicalField::TipoPessoa),
    ("situacao", CanonicalField::Situacao),
    ("status", CanonicalField::Situacao),
    ("estado espiritual", CanonicalField::EstadoEspiritual),
    ("fase espiritual", CanonicalField::EstadoEspiritual),
    ("situacao espiritual", CanonicalField::EstadoEspiritual),
    ("data de nascimento", CanonicalField::DataNascimento),
    ("data nascimento", CanonicalField::DataNascimento),
    ("data nasc", CanonicalField::DataNascimento),
    ("dt nascimento", CanonicalField::DataNascimento),
    ("dt nasc", CanonicalField::DataNascimento),
    ("nascimento", CanonicalField::DataNascimento),
    ("aniversario", CanonicalField::DataNascimento),
    ("endereco", CanonicalField::Endereco),
    ("endereco completo", CanonicalField::Endereco),
    ("logradouro", CanonicalField::Endereco),
    ("rua", CanonicalField::Endereco),
    ("estado civil", CanonicalField::EstadoCivil),
    ("situacao conjugal", CanonicalField::EstadoCivil),
    ("escolaridade", CanonicalField::Escolaridade),
    ("formacao", CanonicalField::Escolaridade),
    ("grau de instrucao", CanonicalField::Escolaridade),
    ("instrucao", CanonicalField::Escolaridade),
    ("observacoes", CanonicalField::Observacoes),
    ("observacao", CanonicalField::Observacoes),
    ("obs", CanonicalField::Observacoes),
    ("notas", CanonicalField::Observacoes),
    ("nota", CanonicalField::Observacoes),
    ("comentarios", CanonicalField::Observacoes),
    ("comentario", CanonicalField::Observacoes),
];

/// Looks up the canonical field for one raw header cell.
pub fn canonical_field_for(raw: &str) -> Option<CanonicalField> {
    let key = normalize_key(raw);
    HEADER_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == key)
        .map(|&(_, field)| field)
}

/// Positional binding of source columns to canonical fields.
///
/// Built once per import from the first line; rows index into it to decide
/// where each cell lands. Columns whose header matched nothing bind to
/// `None` and are skipped for every row.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    bindings: Vec<Option<CanonicalField>>,
}

impl HeaderMap {
    /// Resolves raw header cells into positional bindings.
    ///
    /// # Errors
    ///
    /// Fails with [`IngestError::MissingNameColumn`] when no cell maps to
    /// `nome_completo` — the one column every record requires.
    pub fn resolve(cells: &[String]) -> Result<Self> {
        let bindings: Vec<Option<CanonicalField>> = cells
            .iter()
            .map(|cell| canonical_field_for(cell))
            .collect();
        let has_name = bindings
            .iter()
            .flatten()
            .any(|field| *field == CanonicalField::NomeCompleto);
        if !has_name {
            return Err(IngestError::MissingNameColumn);
        }
        Ok(Self { bindings })
    }

    /// Returns the canonical field bound to a column position, if any.
    pub fn field_at(&self, index: usize) -> Option<CanonicalField> {
        self.bindings.get(index).copied().flatten()
    }

    /// Total number of source columns.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Number of source columns that resolved to a canonical field.
    pub fn mapped_count(&self) -> usize {
        self.bindings.iter().flatten().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn test_every_synonym_resolves_to_its_field() {
        for (synonym, expected) in HEADER_SYNONYMS {
            assert_eq!(
                canonical_field_for(synonym),
                Some(*expected),
                "synonym {synonym:?} should map to {expected:?}"
            );
        }
    }

    #[test]
    fn test_synonym_table_has_no_duplicate_keys() {
        let mut keys: Vec<&str> = HEADER_SYNONYMS.iter().map(|(key, _)| *key).collect();
        keys.sort_unstable();
        let before = keys.len();
        keys.dedup();
        assert_eq!(keys.len(), before, "duplicate synonym key in table");
    }

    #[test]
    fn test_decorated_headers_still_resolve() {
        assert_eq!(
            canonical_field_for("Nome Completo"),
            Some(CanonicalField::NomeCompleto)
        );
        assert_eq!(canonical_field_for("E-MAIL"), Some(CanonicalField::Email));
        assert_eq!(
            canonical_field_for("  Data de Nascimento*  "),
            Some(CanonicalField::DataNascimento)
        );
        assert_eq!(
            canonical_field_for("Observações"),
            Some(CanonicalField::Observacoes)
        );
        assert_eq!(canonical_field_for("nome_completo"), Some(CanonicalField::NomeCompleto));
    }

    #[test]
    fn test_unknown_header_resolves_to_none() {
        assert_eq!(canonical_field_for("matricula"), None);
        assert_eq!(canonical_field_for(""), None);
    }

    #[test]
    fn test_resolve_binds_positions() {
        let map = HeaderMap::resolve(&cells(&["Nome", "Desconhecido", "E-mail"]))
            .expect("resolve headers");
        assert_eq!(map.len(), 3);
        assert_eq!(map.mapped_count(), 2);
        assert_eq!(map.field_at(0), Some(CanonicalField::NomeCompleto));
        assert_eq!(map.field_at(1), None);
        assert_eq!(map.field_at(2), Some(CanonicalField::Email));
        assert_eq!(map.field_at(99), None);
    }

    #[test]
    fn test_resolve_requires_name_column() {
        let err = HeaderMap::resolve(&cells(&["E-mail", "Telefone"])).expect_err("no name column");
        assert!(matches!(err, IngestError::MissingNameColumn));
    }
}
