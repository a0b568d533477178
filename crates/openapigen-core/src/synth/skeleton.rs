use indexmap::IndexMap;

use crate::document::components::Components;
use crate::document::operation::{Operation, PathItem};
use crate::document::parameter::Parameter;
use crate::document::request_body::RequestBody;
use crate::document::response::Response;
use crate::document::schema::{Schema, SchemaOrRef, SchemaType};
use crate::document::server::Server;
use crate::document::spec::{Info, OPENAPI_VERSION, OpenApiSpec};
use crate::infer::resource_namer::{ResourceIdentity, title_case};

/// Version written into `info.version`.
pub const DOCUMENT_VERSION: &str = "0.0.1";

const SUCCESS: &str = "Successful response";

/// Build the CRUD document for `identity`. The resource object schema starts
/// without properties.
pub fn synthesize(identity: &ResourceIdentity) -> OpenApiSpec {
    let mut paths = IndexMap::new();
    paths.insert(identity.collection_path(), collection_item(identity));
    paths.insert(identity.item_path(), resource_item(identity));

    OpenApiSpec {
        openapi: OPENAPI_VERSION.to_string(),
        info: Info {
            title: title_case(&format!("{} API", identity.plural_name)),
            description: Some(format!(
                "API for managing {} resources.",
                identity.singular_display_name
            )),
            version: DOCUMENT_VERSION.to_string(),
        },
        servers: vec![Server {
            url: identity.base_url.clone(),
            description: None,
        }],
        paths,
        components: components(identity),
    }
}

fn resource_ref(identity: &ResourceIdentity) -> SchemaOrRef {
    SchemaOrRef::component(&identity.singular_display_name)
}

fn operation(
    identity: &ResourceIdentity,
    operation_id: String,
    summary: String,
    description: String,
) -> Operation {
    Operation {
        operation_id: Some(operation_id),
        summary: Some(summary),
        description: Some(description),
        tags: vec![identity.plural_display_name.clone()],
        parameters: Vec::new(),
        request_body: None,
        responses: IndexMap::new(),
    }
}

/// `/{plural}`: list and create.
fn collection_item(identity: &ResourceIdentity) -> PathItem {
    let name = &identity.singular_display_name;

    let mut list = operation(
        identity,
        format!("list{}", identity.plural_display_name),
        format!("List '{name}' objects."),
        format!(
            "Retrieve a page of '{name}' objects from the server. Follows the standards for parameters from the [List AIP](https://aip.dev/132)."
        ),
    );
    list.parameters = list_parameters(identity);

    let mut page = Schema::of_type(SchemaType::Object);
    page.properties.insert(
        identity.plural_name.clone(),
        SchemaOrRef::inline(Schema::array_of(SchemaOrRef::component(
            &identity.list_schema_name(),
        ))),
    );
    list.responses.insert(
        "200".to_string(),
        Response::json(SUCCESS, SchemaOrRef::inline(page)),
    );

    let mut create = operation(
        identity,
        format!("create{name}"),
        format!("Creates a new '{name}' object."),
        format!("Creates a new '{name}' object."),
    );
    create.request_body = Some(RequestBody::json(
        format!("The {name} object to create."),
        resource_ref(identity),
    ));
    create.responses.insert(
        "201".to_string(),
        Response::json(SUCCESS, resource_ref(identity)),
    );

    PathItem {
        get: Some(list),
        post: Some(create),
        ..Default::default()
    }
}

fn list_parameters(identity: &ResourceIdentity) -> Vec<Parameter> {
    let with_default = |schema_type, default: &str| {
        let mut schema = Schema::of_type(schema_type);
        schema.default_value = Some(serde_json::Value::String(default.to_string()));
        SchemaOrRef::inline(schema)
    };
    let string = || SchemaOrRef::inline(Schema::of_type(SchemaType::String));

    vec![
        Parameter::query(
            "pageSize",
            "Max size of returned list.",
            with_default(SchemaType::Integer, "25"),
        ),
        Parameter::query(
            "pageToken",
            "A page token received from the previous list call. Provide this to retrieve the next page.",
            string(),
        ),
        Parameter::query(
            "orderBy",
            "The ordering of the returned list. See the [List Ordering API](https://aip.dev/132) for details on the formatting of this field.",
            with_default(SchemaType::String, "displayName"),
        ),
        Parameter::query(
            "filter",
            format!(
                "Filter that will be used to select {} objects to return. See the [Filtering AIP](https://aip.dev/160) for usage and details on the filtering grammar.",
                identity.singular_display_name
            ),
            string(),
        ),
    ]
}

/// `/{plural}/{singular}`: get, update and delete.
fn resource_item(identity: &ResourceIdentity) -> PathItem {
    let name = &identity.singular_display_name;
    let id_param = Parameter::path(
        &identity.singular_name,
        format!("Unique identifier of the desired {name} object."),
        SchemaOrRef::inline(Schema::of_type(SchemaType::String)),
    );
    let not_found = Response::empty(format!("{name} was not found."));

    let mut get = operation(
        identity,
        format!("get{name}"),
        format!("Retrieve {name} object."),
        format!("Retrieve a single {name} object."),
    );
    get.parameters = vec![id_param.clone()];
    get.responses.insert(
        "200".to_string(),
        Response::json(SUCCESS, resource_ref(identity)),
    );
    get.responses.insert("404".to_string(), not_found.clone());

    let mut update = operation(
        identity,
        format!("update{name}"),
        format!("Update {name} object."),
        format!("Update a single {name} object."),
    );
    update.parameters = vec![id_param.clone()];
    update.request_body = Some(RequestBody::json(
        format!("The {name} object to update."),
        resource_ref(identity),
    ));
    update.responses.insert(
        "200".to_string(),
        Response::json(SUCCESS, resource_ref(identity)),
    );
    update.responses.insert("404".to_string(), not_found.clone());

    let mut delete = operation(
        identity,
        format!("delete{name}"),
        format!("Delete {name} object."),
        format!("Delete a single {name} object."),
    );
    delete.parameters = vec![id_param];
    delete
        .responses
        .insert("200".to_string(), Response::empty(SUCCESS));
    delete.responses.insert("404".to_string(), not_found);

    PathItem {
        get: Some(get),
        put: Some(update),
        delete: Some(delete),
        ..Default::default()
    }
}

fn components(identity: &ResourceIdentity) -> Components {
    let name = &identity.singular_display_name;

    let mut list = Schema::array_of(resource_ref(identity));
    list.title = Some(format!("List of {name} objects"));

    let mut resource = Schema::of_type(SchemaType::Object);
    resource.title = Some(name.clone());

    let mut schemas = IndexMap::new();
    schemas.insert(identity.list_schema_name(), SchemaOrRef::inline(list));
    schemas.insert(name.clone(), SchemaOrRef::inline(resource));
    Components { schemas }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parameter::ParameterLocation;
    use crate::infer::derive_identity;

    fn widgets() -> OpenApiSpec {
        synthesize(&derive_identity("https://example.com/widgets"))
    }

    #[test]
    fn test_info_and_servers() {
        let doc = widgets();
        assert_eq!(doc.openapi, "3.0.3");
        assert_eq!(doc.info.title, "Widgets API");
        assert_eq!(
            doc.info.description.as_deref(),
            Some("API for managing Widget resources.")
        );
        assert_eq!(doc.info.version, "0.0.1");
        assert_eq!(doc.servers.len(), 1);
        assert_eq!(doc.servers[0].url, "https://example.com");
    }

    #[test]
    fn test_paths_and_methods() {
        let doc = widgets();
        let keys: Vec<&str> = doc.paths.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["/widgets", "/widgets/{widget}"]);

        let collection = &doc.paths["/widgets"];
        let methods: Vec<&str> = collection.operations().map(|(m, _)| m).collect();
        assert_eq!(methods, vec!["get", "post"]);

        let item = &doc.paths["/widgets/{widget}"];
        let methods: Vec<&str> = item.operations().map(|(m, _)| m).collect();
        assert_eq!(methods, vec!["get", "put", "delete"]);
    }

    #[test]
    fn test_list_parameters() {
        let doc = widgets();
        let list = doc.paths["/widgets"].get.as_ref().unwrap();
        let names: Vec<&str> = list.parameters.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["pageSize", "pageToken", "orderBy", "filter"]);
        assert!(
            list.parameters
                .iter()
                .all(|p| p.location == ParameterLocation::Query && !p.required)
        );

        let page_size = list.parameters[0].schema.as_ref().unwrap().as_schema().unwrap();
        assert_eq!(page_size.schema_type, Some(SchemaType::Integer));
        assert_eq!(page_size.default_value, Some(serde_json::json!("25")));

        let order_by = list.parameters[2].schema.as_ref().unwrap().as_schema().unwrap();
        assert_eq!(order_by.default_value, Some(serde_json::json!("displayName")));
    }

    #[test]
    fn test_list_response_wraps_list_schema() {
        let doc = widgets();
        let list = doc.paths["/widgets"].get.as_ref().unwrap();
        let body = list.responses["200"].json_schema().unwrap().as_schema().unwrap();
        assert_eq!(body.schema_type, Some(SchemaType::Object));
        let field = body.properties["widgets"].as_schema().unwrap();
        assert_eq!(field.schema_type, Some(SchemaType::Array));
        assert_eq!(
            field.items.as_ref().unwrap().ref_path(),
            Some("#/components/schemas/ListOfWidgets")
        );
    }

    #[test]
    fn test_item_operations() {
        let doc = widgets();
        let item = &doc.paths["/widgets/{widget}"];
        for (method, op) in item.operations() {
            assert_eq!(op.parameters.len(), 1, "{method}");
            let param = &op.parameters[0];
            assert_eq!(param.name, "widget");
            assert_eq!(param.location, ParameterLocation::Path);
            assert!(param.required);
            assert_eq!(
                op.responses["404"].description,
                "Widget was not found."
            );
            assert!(op.responses["404"].content.is_empty());
        }

        let delete = item.delete.as_ref().unwrap();
        assert!(delete.request_body.is_none());
        assert!(delete.responses["200"].content.is_empty());

        let update = item.put.as_ref().unwrap();
        let body = update.request_body.as_ref().unwrap();
        assert_eq!(
            body.content["application/json"].schema.as_ref().unwrap().ref_path(),
            Some("#/components/schemas/Widget")
        );
    }

    #[test]
    fn test_create_returns_201() {
        let doc = widgets();
        let create = doc.paths["/widgets"].post.as_ref().unwrap();
        assert!(create.request_body.is_some());
        assert_eq!(
            create.responses["201"].json_schema().unwrap().ref_path(),
            Some("#/components/schemas/Widget")
        );
    }

    #[test]
    fn test_operation_ids() {
        let doc = widgets();
        let ids: Vec<&str> = doc
            .paths
            .values()
            .flat_map(|item| item.operations())
            .filter_map(|(_, op)| op.operation_id.as_deref())
            .collect();
        assert_eq!(
            ids,
            vec![
                "listWidgets",
                "createWidget",
                "getWidget",
                "updateWidget",
                "deleteWidget"
            ]
        );
    }

    #[test]
    fn test_component_schemas() {
        let doc = widgets();
        let keys: Vec<&str> = doc.components.schemas.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["ListOfWidgets", "Widget"]);

        let list = doc.component_schema("ListOfWidgets").unwrap();
        assert_eq!(list.schema_type, Some(SchemaType::Array));
        assert_eq!(
            list.items.as_ref().unwrap().ref_path(),
            Some("#/components/schemas/Widget")
        );

        let widget = doc.component_schema("Widget").unwrap();
        assert_eq!(widget.schema_type, Some(SchemaType::Object));
        assert!(widget.properties.is_empty());
    }

    #[test]
    fn test_fresh_document_per_call() {
        let id = derive_identity("https://example.com/widgets");
        assert_eq!(synthesize(&id), synthesize(&id));
    }
}
