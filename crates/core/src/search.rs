//! Free-text transaction search.
//!
//! Every word of the query must appear somewhere in the transaction's
//! fields. Matching ignores case and French diacritics.

use crate::format::format_date_iso;
use crate::transaction::Transaction;

/// Returns true if `transaction` matches every word of `query`.
///
/// An empty query matches everything.
#[must_use]
pub fn matches_search(transaction: &Transaction, query: &str) -> bool {
    let haystack = normalize(&searchable_text(transaction));
    normalize(query)
        .split_whitespace()
        .all(|word| haystack.contains(word))
}

/// Keeps the transactions matching `query`, in order.
#[must_use]
pub fn filter_transactions<'a>(transactions: &'a [Transaction], query: &str) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|tx| matches_search(tx, query))
        .collect()
}

fn searchable_text(transaction: &Transaction) -> String {
    let mut parts: Vec<String> = vec![
        transaction.id.to_string(),
        transaction.amount.to_string(),
        transaction.kind.label().to_string(),
        transaction.status().kind().as_str().to_string(),
    ];
    parts.extend(
        [
            &transaction.reference,
            &transaction.mission,
            &transaction.client,
            &transaction.price,
        ]
        .into_iter()
        .flatten()
        .cloned(),
    );
    parts.extend(
        [transaction.invoiced_on, transaction.paid_on]
            .into_iter()
            .flatten()
            .map(format_date_iso),
    );
    parts.join(" ")
}

/// Lowercases and strips Latin diacritics.
fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => out.push('a'),
            'ç' => out.push('c'),
            'è' | 'é' | 'ê' | 'ë' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' => out.push('i'),
            'ñ' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => out.push('o'),
            'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
            'ý' | 'ÿ' => out.push('y'),
            'œ' => out.push_str("oe"),
            'æ' => out.push_str("ae"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transaction::TransactionType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn sample() -> Transaction {
        let mut tx = Transaction::new("recA1", dec!(1500), TransactionType::Training)
            .invoiced(NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
        tx.client = Some("Société Générale".to_string());
        tx.mission = Some("Formation Rust avancée".to_string());
        tx.reference = Some("F-2024-007".to_string());
        tx
    }

    #[test]
    fn test_empty_query_matches() {
        assert!(matches_search(&sample(), ""));
        assert!(matches_search(&sample(), "   "));
    }

    #[test]
    fn test_matches_ignoring_case_and_accents() {
        let tx = sample();
        assert!(matches_search(&tx, "societe"));
        assert!(matches_search(&tx, "SOCIÉTÉ générale"));
        assert!(matches_search(&tx, "avancee rust"));
    }

    #[test]
    fn test_every_word_must_match() {
        let tx = sample();
        assert!(matches_search(&tx, "rust f-2024-007"));
        assert!(!matches_search(&tx, "rust python"));
    }

    #[test]
    fn test_matches_type_status_amount_and_dates() {
        let tx = sample();
        assert!(matches_search(&tx, "formation"));
        assert!(matches_search(&tx, "waiting"));
        assert!(matches_search(&tx, "1500"));
        assert!(matches_search(&tx, "2024-03-12"));
    }

    #[test]
    fn test_filter_transactions_keeps_order() {
        let first = sample();
        let other = Transaction::new("recB2", dec!(300), TransactionType::School);
        let third = Transaction::new("recC3", dec!(-120), TransactionType::Contribution);
        let all = vec![first, other, third];

        let found: Vec<&str> = filter_transactions(&all, "rec")
            .into_iter()
            .map(|tx| tx.id.as_str())
            .collect();
        assert_eq!(found, vec!["recA1", "recB2", "recC3"]);

        let found = filter_transactions(&all, "ecole");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "recB2");
    }
}
