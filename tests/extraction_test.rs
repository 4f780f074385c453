use newsbrief::{extract, extract_with_config, Config, EMPTY_SUMMARY_MESSAGE};

#[test]
fn full_article_page_produces_complete_record() {
    let html = r#"
        <html>
          <body>
            <h1>Title A</h1>
            <span class="byline">Reporter B</span>
            <article>
              <p>The council approved the new transit budget on Tuesday after a long
                 public session that ran well past midnight at city hall.</p>
              <p>Supporters argued the plan would shorten commutes across the river
                 districts, while opponents questioned the projected ridership.</p>
              <p>Construction on the first corridor is expected to begin next spring,
                 pending a final environmental review by the regional authority.</p>
            </article>
          </body>
        </html>
    "#;

    let record = extract(html);

    assert_eq!(record.title.as_deref(), Some("Title A"));
    assert_eq!(record.byline.as_deref(), Some("Reporter B"));
    assert!(record.body_text.contains("transit budget"));
    assert!(record.body_text.contains("environmental review"));
    assert!(record.summary.chars().count() <= 303);
    assert!(record.body_text.starts_with(record.summary.split(' ').next().unwrap()));
}

#[test]
fn page_without_paragraphs_yields_sentinel_summary() {
    let html = r#"
        <html>
          <body>
            <h1>빈 기사</h1>
            <div class="byline">홍길동 기자</div>
          </body>
        </html>
    "#;

    let record = extract(html);

    // Title and byline resolve independently of the empty body
    assert_eq!(record.title.as_deref(), Some("빈 기사"));
    assert_eq!(record.byline.as_deref(), Some("홍길동 기자"));
    assert_eq!(record.body_text, "");
    assert_eq!(record.summary, EMPTY_SUMMARY_MESSAGE);
}

#[test]
fn missing_title_and_byline_are_absent_not_errors() {
    let html = r"
        <html>
          <body>
            <article>
              <p>A page can carry body text without any heading or credit markup.</p>
              <p>The record must still form, with the optional fields left empty.</p>
            </article>
          </body>
        </html>
    ";

    let record = extract(html);

    assert!(record.title.is_none());
    assert!(record.byline.is_none());
    assert!(!record.body_text.is_empty());
}

#[test]
fn byline_cascade_prefers_reporter_class_over_author() {
    let html = r#"
        <html>
          <body>
            <h1>Headline</h1>
            <span class="reporter-block">정수민 기자</span>
            <span class="author">Desk Editor</span>
            <article><p>Body text long enough to be accepted by the paragraph filter.</p></article>
          </body>
        </html>
    "#;

    let record = extract(html);
    assert_eq!(record.byline.as_deref(), Some("정수민 기자"));
}

#[test]
fn class_based_container_is_found_when_article_element_is_missing() {
    let html = r#"
        <html>
          <body>
            <div class="news_article">
              <p>Markup without a semantic article element still has to resolve.</p>
              <p>The class-based cascade tiers cover the common CMS conventions.</p>
            </div>
          </body>
        </html>
    "#;

    let record = extract(html);
    assert!(record.body_text.contains("semantic article element"));
    assert!(record.body_text.contains("CMS conventions"));
}

#[test]
fn strict_config_demands_a_larger_paragraph_group() {
    let html = r#"
        <html>
          <body>
            <div class="content">
              <p>Two paragraphs are plenty for the lenient acceptance threshold.</p>
              <p>The strict profile refuses them and sweeps the page instead.</p>
            </div>
            <p>STRAY_PARAGRAPH visible only to the generic all-paragraphs query.</p>
          </body>
        </html>
    "#;

    let lenient = extract(html);
    assert!(!lenient.body_text.contains("STRAY_PARAGRAPH"));

    let strict = extract_with_config(html, &Config::strict());
    assert!(strict.body_text.contains("STRAY_PARAGRAPH"));
}

#[test]
fn summary_is_a_leading_excerpt_of_the_body() {
    let html = r"
        <article>
          <p>First sentence of the story. Second sentence follows it closely.</p>
          <p>Third sentence closes the lede. Fourth sentence starts the detail.</p>
        </article>
    ";

    let record = extract(html);
    assert_eq!(
        record.summary,
        "First sentence of the story. Second sentence follows it closely. Third sentence closes the lede.",
    );
}
