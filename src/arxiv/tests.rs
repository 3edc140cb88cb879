#[cfg(test)]
mod tests {
    use crate::arxiv::{
        build_search_url, extract_arxiv_id_from_url, normalize_whitespace, parse_atom_response,
    };
    use crate::config::SearchConfig;

    const SAMPLE_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/"
      xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title>ArXiv Query</title>
  <opensearch:totalResults>100</opensearch:totalResults>
  <opensearch:startIndex>0</opensearch:startIndex>
  <opensearch:itemsPerPage>2</opensearch:itemsPerPage>
  <entry>
    <id>http://arxiv.org/abs/1706.03762v7</id>
    <updated>2023-08-02T01:09:28Z</updated>
    <published>2017-06-12T17:57:34Z</published>
    <title>Attention Is All You Need</title>
    <summary>  The dominant sequence transduction models are based on complex recurrent or
convolutional neural networks.  </summary>
    <author><name>Ashish Vaswani</name></author>
    <author><name>Noam Shazeer</name></author>
    <author><name>Niki Parmar</name></author>
    <link href="http://arxiv.org/abs/1706.03762v7" rel="alternate" type="text/html"/>
    <link href="http://arxiv.org/pdf/1706.03762v7" title="pdf" type="application/pdf"/>
    <category term="cs.CL" scheme="http://arxiv.org/schemas/atom"/>
    <category term="cs.AI" scheme="http://arxiv.org/schemas/atom"/>
  </entry>
  <entry>
    <id>http://arxiv.org/abs/1810.04805v2</id>
    <updated>2019-05-24T12:00:00Z</updated>
    <published>2018-10-11T00:00:00Z</published>
    <title>BERT: Pre-training of Deep Bidirectional Transformers</title>
    <summary>We introduce a new language representation model.</summary>
    <author><name>Jacob Devlin</name></author>
    <category term="cs.CL"/>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_multiple_entries() {
        let papers = parse_atom_response(SAMPLE_FEED).unwrap();
        assert_eq!(papers.len(), 2);

        let first = &papers[0];
        assert_eq!(first.arxiv_id, "1706.03762v7");
        assert_eq!(first.title, "Attention Is All You Need");
        assert_eq!(first.authors.len(), 3);
        assert_eq!(first.authors[0], "Ashish Vaswani");
        assert!(first.summary.starts_with("The dominant sequence"));
        assert!(!first.summary.contains('\n'));
        assert_eq!(first.url, "http://arxiv.org/pdf/1706.03762v7");
        assert_eq!(first.categories, vec!["cs.CL", "cs.AI"]);
        assert_eq!(first.published.to_rfc3339(), "2017-06-12T17:57:34+00:00");
    }

    #[test]
    fn test_parse_entry_without_pdf_link_synthesizes_url() {
        let papers = parse_atom_response(SAMPLE_FEED).unwrap();
        let second = &papers[1];
        assert_eq!(second.arxiv_id, "1810.04805v2");
        assert_eq!(second.url, "https://arxiv.org/pdf/1810.04805v2");
    }

    #[test]
    fn test_parse_empty_feed() {
        let feed = r#"<feed>
            <opensearch:totalResults>0</opensearch:totalResults>
        </feed>"#;
        let papers = parse_atom_response(feed).unwrap();
        assert!(papers.is_empty());
    }

    #[test]
    fn test_parse_non_feed_is_error() {
        let result = parse_atom_response("<html><body>Service Unavailable</body></html>");
        assert!(result.is_err());
    }

    #[test]
    fn test_extract_arxiv_id_from_url() {
        assert_eq!(
            extract_arxiv_id_from_url("http://arxiv.org/abs/1706.03762v7"),
            "1706.03762v7"
        );
        assert_eq!(
            extract_arxiv_id_from_url("http://arxiv.org/pdf/2301.12345"),
            "2301.12345"
        );
        assert_eq!(extract_arxiv_id_from_url("2301.12345"), "2301.12345");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(
            normalize_whitespace("  Hello   World\n  Test  "),
            "Hello World Test"
        );
        assert_eq!(normalize_whitespace("single"), "single");
    }

    #[test]
    fn test_build_search_url() {
        let config = SearchConfig::default();
        let url = build_search_url(&config.api_base_url, "transformer attention", 7);
        assert!(url.starts_with("https://export.arxiv.org/api/query?"));
        assert!(url.contains("transformer"));
        assert!(url.contains("max_results=7"));
        assert!(url.contains("sortBy=relevance"));
        assert!(url.contains("sortOrder=descending"));
    }

    #[test]
    fn test_build_search_url_empty_keyword() {
        let url = build_search_url("https://export.arxiv.org/api/query", "", 5);
        assert!(url.contains(&urlencoding::encode("all:*").into_owned()));
    }
}
