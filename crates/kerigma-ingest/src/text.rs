//! Text folding helpers shared by header matching and email slugs.

/// Folds one Latin accented character to its ASCII base letter.
///
/// Covers the accents that occur in Portuguese spreadsheet headers and
/// names; anything else passes through unchanged.
fn fold_diacritic(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// Normalizes free text for synonym lookup.
///
/// Lowercases, folds diacritics, and collapses every run of characters
/// that are not ASCII alphanumerics into a single space, trimmed at both
/// ends. `"Data de Nascimento*"` becomes `"data de nascimento"`.
pub fn normalize_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.to_lowercase().chars() {
        let folded = fold_diacritic(c);
        if folded.is_ascii_alphanumeric() {
            out.push(folded);
        } else if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Builds an email-safe slug from a person's name.
///
/// Same folding as [`normalize_key`] but joins words with dots:
/// `"João da Silva"` becomes `"joao.da.silva"`.
pub fn slugify(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.to_lowercase().chars() {
        let folded = fold_diacritic(c);
        if folded.is_ascii_alphanumeric() {
            out.push(folded);
        } else if !out.is_empty() && !out.ends_with('.') {
            out.push('.');
        }
    }
    if out.ends_with('.') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_key_basic() {
        assert_eq!(normalize_key("Nome Completo"), "nome completo");
        assert_eq!(normalize_key("  E-MAIL  "), "e mail");
        assert_eq!(normalize_key("telefone"), "telefone");
    }

    #[test]
    fn test_normalize_key_folds_diacritics() {
        assert_eq!(normalize_key("Observações"), "observacoes");
        assert_eq!(normalize_key("Situação"), "situacao");
        assert_eq!(normalize_key("Endereço"), "endereco");
        assert_eq!(normalize_key("Função/Cargo"), "funcao cargo");
    }

    #[test]
    fn test_normalize_key_collapses_symbol_runs() {
        assert_eq!(normalize_key("data___de---nascimento"), "data de nascimento");
        assert_eq!(normalize_key("*** Nome ***"), "nome");
        assert_eq!(normalize_key("nº Tel."), "n tel");
    }

    #[test]
    fn test_normalize_key_empty_and_symbols_only() {
        assert_eq!(normalize_key(""), "");
        assert_eq!(normalize_key("---"), "");
    }

    #[test]
    fn test_slugify_names() {
        assert_eq!(slugify("João da Silva"), "joao.da.silva");
        assert_eq!(slugify("Maria-José  Souza"), "maria.jose.souza");
        assert_eq!(slugify("Ana"), "ana");
        assert_eq!(slugify("  "), "");
    }
}
