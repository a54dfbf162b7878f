use serde::{Deserialize, Deserializer, Serialize};

/// The author of a post. No field is validated; any string is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "fullName", default, deserialize_with = "null_as_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
}

/// A post record.
///
/// Decoding a `Post` is the full-replace strategy: any field missing from the
/// incoming document (or given as `null`) takes the empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: Author,
}

/// Partial author document. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPatch {
    #[serde(rename = "fullName", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Partial post document used by PATCH. All fields are optional; the nested
/// author is merged field by field rather than replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPatch>,
}

impl Author {
    pub fn new(
        full_name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    pub fn apply(&mut self, patch: AuthorPatch) {
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(username) = patch.username {
            self.username = username;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
    }
}

impl Post {
    pub fn new(title: impl Into<String>, body: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author,
        }
    }

    /// Merge a partial document into this post. Absent fields are left untouched.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(author) = patch.author {
            self.author.apply(author);
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Post {
        Post::new("t", "b", Author::new("A", "a", "a@x.com"))
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "t",
                "body": "b",
                "author": { "fullName": "A", "username": "a", "email": "a@x.com" }
            })
        );
    }

    #[test]
    fn missing_fields_decode_to_empty_strings() {
        let post: Post = serde_json::from_str(r#"{"title":"only"}"#).unwrap();
        assert_eq!(post.title, "only");
        assert_eq!(post.body, "");
        assert_eq!(post.author, Author::default());
    }

    #[test]
    fn null_fields_decode_to_empty_strings() {
        let post: Post =
            serde_json::from_str(r#"{"title":null,"author":{"email":null,"username":"u"}}"#)
                .unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.author.username, "u");
        assert_eq!(post.author.email, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let post: Post = serde_json::from_str(r#"{"title":"t","id":7}"#).unwrap();
        assert_eq!(post.title, "t");
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        assert!(serde_json::from_str::<Post>(r#"{"title":5}"#).is_err());
        assert!(serde_json::from_str::<PostPatch>(r#"{"body":[]}"#).is_err());
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut post = sample();
        let patch: PostPatch = serde_json::from_str(r#"{"body":"x"}"#).unwrap();
        post.apply(patch);

        assert_eq!(post.body, "x");
        assert_eq!(post.title, "t");
        assert_eq!(post.author, Author::new("A", "a", "a@x.com"));
    }

    #[test]
    fn apply_merges_nested_author() {
        let mut post = sample();
        let patch: PostPatch =
            serde_json::from_str(r#"{"author":{"email":"new@x.com"}}"#).unwrap();
        post.apply(patch);

        assert_eq!(post.author, Author::new("A", "a", "new@x.com"));
    }

    #[test]
    fn null_in_patch_leaves_field_untouched() {
        let mut post = sample();
        let patch: PostPatch = serde_json::from_str(r#"{"title":null,"author":null}"#).unwrap();
        post.apply(patch);

        assert_eq!(post, sample());
    }
}
