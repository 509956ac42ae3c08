use http::Method;
use serde_json::json;

use super::support::{dm_api, value_at};
use crate::generator::{
  request::{RequestPathError, RequestTarget, generate_request, request_class_name},
  shapes::{Operation, Shape},
  warnings::GenerationWarning,
};

const GET_DM_EVENTS_SWIFT: &str = r#"import Foundation

/// Returns recent DM Events across DM conversations
/// Required OAuth 2.0 scopes: dm.read, tweet.read, users.read
open class GetDmEventsRequestV2: TwitterAPIRequest {

    /// The maximum number of results.
    public let maxResults: Int?
    /// This parameter is used to get a specified 'page' of results.
    public let paginationToken: String?
    /// The set of event_types to include in the results.
    public let eventTypes: Set<TwitterDirectMessageEventTypeV2>?
    /// A comma separated list of DmEvent fields to display.
    public let dmEventFields: Set<TwitterDmEventFieldsV2>?
    /// A comma separated list of fields to expand.
    public let expansions: Set<TwitterDmEventExpansionsV2>?
    /// A comma separated list of Media fields to display.
    public let mediaFields: Set<TwitterMediaFieldsV2>?
    /// A comma separated list of User fields to display.
    public let userFields: Set<TwitterUserFieldsV2>?
    /// A comma separated list of Tweet fields to display.
    public let tweetFields: Set<TwitterTweetFieldsV2>?

    public var method: HTTPMethod {
        return .get
    }

    public var path: String {
        return "/2/dm_events"
    }

    open var parameters: [String: Any] {
        var p = [String: Any]()
        maxResults.map { p["max_results"] = $0 }
        paginationToken.map { p["pagination_token"] = $0 }
        eventTypes?.bind(param: &p)
        dmEventFields?.bind(param: &p)
        expansions?.bind(param: &p)
        mediaFields?.bind(param: &p)
        userFields?.bind(param: &p)
        tweetFields?.bind(param: &p)
        return p
    }

    public init(
        maxResults: Int? = .none,
        paginationToken: String? = .none,
        eventTypes: Set<TwitterDirectMessageEventTypeV2>? = .none,
        dmEventFields: Set<TwitterDmEventFieldsV2>? = .none,
        expansions: Set<TwitterDmEventExpansionsV2>? = .none,
        mediaFields: Set<TwitterMediaFieldsV2>? = .none,
        userFields: Set<TwitterUserFieldsV2>? = .none,
        tweetFields: Set<TwitterTweetFieldsV2>? = .none
    ) {
        self.maxResults = maxResults
        self.paginationToken = paginationToken
        self.eventTypes = eventTypes
        self.dmEventFields = dmEventFields
        self.expansions = expansions
        self.mediaFields = mediaFields
        self.userFields = userFields
        self.tweetFields = tweetFields
    }
}
"#;

const GET_CONVERSATION_DM_EVENTS_SWIFT: &str = r#"import Foundation

/// Returns DM Events for a DM Conversation
/// Required OAuth 2.0 scopes: dm.read, tweet.read, users.read
open class GetDmConversationsWithParticipantIdDmEventsRequestV2: TwitterAPIRequest {

    /// The ID of the participant user for the One to One DM conversation.
    public let participantID: String
    /// The maximum number of results.
    public let maxResults: Int?
    /// This parameter is used to get a specified 'page' of results.
    public let paginationToken: String?
    /// The set of event_types to include in the results.
    public let eventTypes: Set<TwitterDirectMessageEventTypeV2>?
    /// A comma separated list of DmEvent fields to display.
    public let dmEventFields: Set<TwitterDmEventFieldsV2>?
    /// A comma separated list of fields to expand.
    public let expansions: Set<TwitterDmEventExpansionsV2>?
    /// A comma separated list of Media fields to display.
    public let mediaFields: Set<TwitterMediaFieldsV2>?
    /// A comma separated list of User fields to display.
    public let userFields: Set<TwitterUserFieldsV2>?
    /// A comma separated list of Tweet fields to display.
    public let tweetFields: Set<TwitterTweetFieldsV2>?

    public var method: HTTPMethod {
        return .get
    }

    public var path: String {
        return "/2/dm_conversations/with/\(participantID)/dm_events"
    }

    open var parameters: [String: Any] {
        var p = [String: Any]()
        maxResults.map { p["max_results"] = $0 }
        paginationToken.map { p["pagination_token"] = $0 }
        eventTypes?.bind(param: &p)
        dmEventFields?.bind(param: &p)
        expansions?.bind(param: &p)
        mediaFields?.bind(param: &p)
        userFields?.bind(param: &p)
        tweetFields?.bind(param: &p)
        return p
    }

    public init(
        participantID: String,
        maxResults: Int? = .none,
        paginationToken: String? = .none,
        eventTypes: Set<TwitterDirectMessageEventTypeV2>? = .none,
        dmEventFields: Set<TwitterDmEventFieldsV2>? = .none,
        expansions: Set<TwitterDmEventExpansionsV2>? = .none,
        mediaFields: Set<TwitterMediaFieldsV2>? = .none,
        userFields: Set<TwitterUserFieldsV2>? = .none,
        tweetFields: Set<TwitterTweetFieldsV2>? = .none
    ) {
        self.participantID = participantID
        self.maxResults = maxResults
        self.paginationToken = paginationToken
        self.eventTypes = eventTypes
        self.dmEventFields = dmEventFields
        self.expansions = expansions
        self.mediaFields = mediaFields
        self.userFields = userFields
        self.tweetFields = tweetFields
    }
}
"#;

const POST_DM_CONVERSATION_SWIFT: &str = r#"import Foundation

/// Creates a new DM Conversation.
/// https://developer.twitter.com/en/docs/twitter-api/direct-messages/manage/api-reference/post-dm_conversations
/// Required OAuth 2.0 scopes: dm.read, dm.write, tweet.read, users.read
open class PostDmConversationRequestV2: TwitterAPIRequest {

    /// The conversation type that is being created.
    public let conversationType: ConversationType
    /// Participants for the DM Conversation.
    public let participantIDs: [String]
    /// Attachments to a DM Event.
    public let attachments: [String]?
    /// Text of the message.
    public let text: String?

    public var method: HTTPMethod {
        return .post
    }

    public var path: String {
        return "/2/dm_conversations"
    }

    public var bodyContentType: BodyContentType {
        return .json
    }

    open var parameters: [String: Any] {
        var p = [String: Any]()
        #warning("Please write it yourself as it is difficult to generate automatically.")
        return p
    }

    public init(
        conversationType: ConversationType,
        participantIDs: [String],
        attachments: [String]? = .none,
        text: String? = .none
    ) {
        self.conversationType = conversationType
        self.participantIDs = participantIDs
        self.attachments = attachments
        self.text = text
    }
}
"#;

fn operation_at(path: &str) -> Operation {
  let spec = dm_api();
  Operation::decode(&value_at(&spec, path)).unwrap()
}

#[test]
fn test_generate_get_dm_events() {
  let path = "paths./2/dm_events.get";
  let request = generate_request(path, &operation_at(path)).unwrap();

  assert_eq!(request.code, GET_DM_EVENTS_SWIFT);
  assert!(request.warnings.is_empty());
}

#[test]
fn test_generate_interpolates_path_parameters() {
  let path = "paths./2/dm_conversations/with/{participant_id}/dm_events.get";
  let request = generate_request(path, &operation_at(path)).unwrap();

  assert_eq!(request.code, GET_CONVERSATION_DM_EVENTS_SWIFT);
  assert!(request.warnings.is_empty());
}

#[test]
fn test_generate_json_body_request() {
  let path = "paths./2/dm_conversations.post";
  let request = generate_request(path, &operation_at(path)).unwrap();

  assert_eq!(request.code, POST_DM_CONVERSATION_SWIFT);
}

#[test]
fn test_generate_is_idempotent() {
  let path = "paths./2/dm_events.get";
  let operation = operation_at(path);

  let first = generate_request(path, &operation).unwrap();
  let second = generate_request(path, &operation).unwrap();
  assert_eq!(first.code, second.code);
}

#[test]
fn test_request_class_name() {
  let cases = [
    ("get", "getDmEvents", "GetDmEventsRequestV2"),
    (
      "get",
      "getDmConversationsWithParticipantIdDmEvents",
      "GetDmConversationsWithParticipantIdDmEventsRequestV2",
    ),
    ("post", "dmConversationIdCreate", "PostDmConversationRequestV2"),
    ("post", "dmConversationByIdEventIdCreate", "PostDmConversationByIdRequestV2"),
    ("delete", "deleteTweetById", "DeleteTweetByIdRequestV2"),
    ("get", "findTweetById", "GetFindTweetByIdRequestV2"),
  ];
  for (method, operation_id, expected) in cases {
    assert_eq!(
      request_class_name(method, operation_id),
      expected,
      "failed for {method} {operation_id}"
    );
  }
}

#[test]
fn test_request_target_from_path() {
  let target = RequestTarget::from_path("paths./2/dm_conversations/with/{participant_id}/dm_events.get").unwrap();
  assert_eq!(target.url, "/2/dm_conversations/with/{participant_id}/dm_events");
  assert_eq!(target.method, Method::GET);

  let target = RequestTarget::from_path("paths./2/tweets/search/stream.json.delete").unwrap();
  assert_eq!(target.url, "/2/tweets/search/stream.json");
  assert_eq!(target.method, Method::DELETE);
}

#[test]
fn test_request_target_errors() {
  assert_eq!(
    RequestTarget::from_path("paths"),
    Err(RequestPathError::Malformed {
      path: "paths".to_string()
    })
  );
  assert_eq!(
    RequestTarget::from_path("paths./2/dm_events.options"),
    Err(RequestPathError::UnsupportedMethod {
      method: "options".to_string()
    })
  );
}

fn minimal_operation(extra: serde_json::Value) -> Operation {
  let mut value = json!({
    "security": [],
    "tags": [],
    "summary": "",
    "description": "",
    "operationId": "getThing",
    "responses": {}
  });
  for (key, field) in extra.as_object().unwrap() {
    value[key] = field.clone();
  }
  Operation::decode(&value).unwrap()
}

#[test]
fn test_required_scalars_and_string_lists_bind_directly() {
  let operation = minimal_operation(json!({
    "parameters": [
      { "name": "query", "in": "query", "description": "Search query.", "required": true, "schema": { "type": "string" } },
      { "name": "count", "in": "query", "description": "", "required": true, "schema": { "type": "integer" } },
      {
        "name": "ids", "in": "query", "description": "", "required": true,
        "schema": { "type": "array", "items": { "type": "string", "$$ref": "#/components/schemas/UserId" } }
      },
      {
        "name": "usernames", "in": "query", "description": "",
        "schema": { "type": "array", "items": { "type": "string", "$$ref": "#/components/schemas/UserId" } }
      }
    ]
  }));

  let code = generate_request("paths./2/things.get", &operation).unwrap().code;
  assert!(code.contains("        p[\"query\"] = query\n"));
  assert!(code.contains("        p[\"count\"] = count\n"));
  assert!(code.contains("        p[\"ids\"] = ids.joined(separator: \",\")\n"));
  assert!(code.contains("        usernames.map { p[\"usernames\"] = $0.joined(separator: \",\") }\n"));
  assert!(code.contains("        usernames: [String]? = .none\n"));
}

#[test]
fn test_empty_operation_renders_empty_initializer() {
  let operation = minimal_operation(json!({}));

  let code = generate_request("paths./2/users/me.get", &operation).unwrap().code;
  assert!(code.starts_with("import Foundation\n\nopen class GetThingRequestV2: TwitterAPIRequest {\n\n    public var method"));
  assert!(code.ends_with("    public init() {}\n}\n"));
}

#[test]
fn test_undeclared_path_parameter_is_reported() {
  let operation = minimal_operation(json!({}));

  let request = generate_request("paths./2/users/{id}.get", &operation).unwrap();
  assert!(request.code.contains("return \"/2/users/{id}\""));
  assert_eq!(
    request.warnings,
    vec![GenerationWarning::UndeclaredPathParameter {
      parameter_name: "id".to_string()
    }]
  );
}

#[test]
fn test_unresolved_type_renders_placeholder() {
  let operation = minimal_operation(json!({
    "parameters": [
      { "name": "verbose", "in": "query", "description": "", "schema": { "type": "boolean" } }
    ]
  }));

  let request = generate_request("paths./2/things.get", &operation).unwrap();
  assert!(request.code.contains("    public let verbose: Can not resolve: verbose\n"));
  assert_eq!(request.warnings.len(), 1);
}
