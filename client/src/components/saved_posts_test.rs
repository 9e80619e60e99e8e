use super::*;

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("twitter"), "Twitter");
    assert_eq!(capitalize("LinkedIn"), "LinkedIn");
    assert_eq!(capitalize(""), "");
}

#[test]
fn post_meta_joins_platform_and_style() {
    let post = SavedPost {
        title: "Launch".to_owned(),
        content: "c".to_owned(),
        generated_post: "g".to_owned(),
        platform: "facebook".to_owned(),
        style: "humorous".to_owned(),
    };
    assert_eq!(post_meta(&post), "Facebook • Humorous");
}
