use super::types::StoryCluster;
use crate::text::tokenize;

/// Chooses the member title that best captures the cluster's vocabulary.
///
/// Each title is scored by summing the cluster's token counts over its own
/// tokens. The highest score wins and shorter raw titles break ties; the stable
/// sort keeps arrival order for anything still tied. Scores use the counts of
/// every member, so a title's score depends on which other titles joined.
pub fn representative_title(cluster: &StoryCluster<'_>) -> String {
    let mut scored: Vec<(usize, &str)> = cluster
        .members
        .iter()
        .map(|item| {
            let title = item.title_str();
            (cluster.token_counts.score(&tokenize(title)), title)
        })
        .collect();

    scored.sort_by(|(score_a, title_a), (score_b, title_b)| {
        score_b
            .cmp(score_a)
            .then_with(|| title_a.chars().count().cmp(&title_b.chars().count()))
    });

    scored
        .first()
        .map(|(_, title)| title.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NewsItem;

    fn cluster_of<'a>(items: &'a [NewsItem]) -> StoryCluster<'a> {
        let mut iter = items.iter();
        let first = iter.next().unwrap();
        let mut cluster = StoryCluster::seed(first, &tokenize(first.title_str()));
        for item in iter {
            cluster.add(item, &tokenize(item.title_str()));
        }
        cluster
    }

    #[test]
    fn test_densest_title_wins() {
        let items = vec![
            NewsItem::with_title("Flood waters rise in valley"),
            NewsItem::with_title("Valley flood waters rise again overnight"),
            NewsItem::with_title("Flood warning"),
        ];
        let cluster = cluster_of(&items);
        assert_eq!(
            representative_title(&cluster),
            "Valley flood waters rise again overnight"
        );
    }

    #[test]
    fn test_shorter_title_breaks_ties() {
        let items = vec![
            NewsItem::with_title("Storm closes harbor!!!"),
            NewsItem::with_title(" Storm closes harbor"),
        ];
        let cluster = cluster_of(&items);
        assert_eq!(representative_title(&cluster), "Storm closes harbor");
    }
}
