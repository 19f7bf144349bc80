use test_utils::answer_fixture;

use super::render_links;

#[test]
fn it_separates_citation_markers_from_urls() {
    let res = render_links("see https://x.test/a[1] for more");
    insta::assert_snapshot!(res, @"see [https://x.test/a](https://x.test/a) [1] for more");
}

#[test]
fn it_separates_multi_digit_citations() {
    let res = render_links("https://x.test/a[12][3]");
    insta::assert_snapshot!(res, @"[https://x.test/a](https://x.test/a) [12][3]");
}

#[test]
fn it_wraps_bare_urls() {
    let res = render_links("go to https://x.test/b now");
    insta::assert_snapshot!(res, @"go to [https://x.test/b](https://x.test/b) now");
}

#[test]
fn it_wraps_http_urls() {
    let res = render_links("http://x.test/c");
    insta::assert_snapshot!(res, @"[http://x.test/c](http://x.test/c)");
}

#[test]
fn it_stops_urls_at_delimiters() {
    let res = render_links("(https://x.test/d) and https://x.test/e]");
    insta::assert_snapshot!(res, @"([https://x.test/d](https://x.test/d)) and [https://x.test/e](https://x.test/e)]");
}

#[test]
fn it_ignores_non_numeric_brackets() {
    let res = render_links("https://x.test/f[a]");
    insta::assert_snapshot!(res, @"[https://x.test/f](https://x.test/f)[a]");
}

#[test]
fn it_ignores_empty_brackets() {
    let res = render_links("https://x.test/g[]");
    insta::assert_snapshot!(res, @"[https://x.test/g](https://x.test/g)[]");
}

#[test]
fn it_ignores_a_scheme_without_a_host() {
    assert_eq!(render_links("https:// nothing"), "https:// nothing");
    assert_eq!(render_links("no links here"), "no links here");
    assert_eq!(render_links(""), "");
}

#[test]
fn it_leaves_existing_markdown_links() {
    let text = "[학교 홈페이지](https://www.gwnu.ac.kr) 참고";
    assert_eq!(render_links(text), text);
}

#[test]
fn it_is_idempotent() {
    let inputs = vec![
        "see https://x.test/a[1] for more",
        "go to https://x.test/b now",
        "https://x.test/a[1]https://x.test/b",
        answer_fixture(),
    ];

    for input in inputs {
        let once = render_links(input);
        assert_eq!(render_links(&once), once);
    }
}

#[test]
fn it_renders_answers() {
    let res = render_links(answer_fixture());
    assert_eq!(
        res,
        "증명서는 온라인으로 발급받을 수 있습니다. 자세한 내용은 [https://www.gwnu.ac.kr/kr/7852/subview.do](https://www.gwnu.ac.kr/kr/7852/subview.do) [1] 를 참고하세요.\n\n학사 일정은 학교 홈페이지([https://www.gwnu.ac.kr](https://www.gwnu.ac.kr))에서 확인할 수 있습니다[2]."
    );
}
