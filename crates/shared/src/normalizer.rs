use crate::stemmer::Stemmer;

/// Lowercase, drop everything but ASCII letters and whitespace, stem each token
/// and join with single spaces. May return an empty string.
pub fn normalize<S: Stemmer + ?Sized>(text: &str, stemmer: &S) -> String {
    let filtered: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect();

    filtered
        .split_whitespace()
        .map(|token| stemmer.stem(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One normalized document per input, in the same order.
pub fn normalize_all<S: Stemmer + ?Sized>(texts: &[String], stemmer: &S) -> Vec<String> {
    texts.iter().map(|t| normalize(t, stemmer)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stemmer::IndonesianStemmer;

    struct Identity;

    impl Stemmer for Identity {
        fn stem(&self, word: &str) -> String {
            word.to_string()
        }
    }

    #[test]
    fn folds_case_and_filters_characters() {
        assert_eq!(
            normalize("COVID-19: 3 Kasus  Baru!\tdi  Jakarta", &Identity),
            "covid kasus baru di jakarta"
        );
    }

    #[test]
    fn non_latin_letters_are_deleted() {
        assert_eq!(normalize("Café ñandú 健康 sehat", &Identity), "caf and sehat");
    }

    #[test]
    fn punctuation_only_input_becomes_empty() {
        assert_eq!(normalize("123 !!! ...", &Identity), "");
        assert_eq!(normalize("", &Identity), "");
    }

    #[test]
    fn stems_each_token() {
        let stemmer = IndonesianStemmer::new();
        assert_eq!(
            normalize("Dokter anjurkan olahraga rutin", &stemmer),
            "dokter anjur olahraga rutin"
        );
        assert_eq!(
            normalize("Kasus ISPA meningkat musim hujan", &stemmer),
            "kasus ispa tingkat musim hujan"
        );
    }

    #[test]
    fn output_matches_input_count_and_charset() {
        let inputs: Vec<String> = vec![
            "Vaksinasi anak tingkatkan kekebalan".into(),
            "".into(),
            "???".into(),
            "  Banyak   spasi  ".into(),
            "Angka 2024 & simbol #sehat".into(),
        ];

        let out = normalize_all(&inputs, &IndonesianStemmer::new());

        assert_eq!(out.len(), inputs.len());
        for doc in &out {
            assert!(doc.chars().all(|c| c.is_ascii_lowercase() || c == ' '));
            assert!(!doc.contains("  "));
            assert!(!doc.starts_with(' ') && !doc.ends_with(' '));
        }
        assert_eq!(out[1], "");
        assert_eq!(out[2], "");
    }
}
