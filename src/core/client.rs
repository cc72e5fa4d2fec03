use crate::core::credentials::CredentialsProvider;
use crate::core::operation::{Operation, Paginated};
use crate::core::paginator::Paginator;
use crate::core::retry::RetryPolicy;
use crate::core::signer::SigV4Signer;
use crate::core::transport::{host_header, ReqwestTransport};
use crate::domain::model::*;
use crate::domain::ports::{ConfigProvider, HttpRequest, HttpResponse, Transport};
use crate::utils::error::{ConnectError, Result, ServiceErrorKind};
use crate::utils::validation::Validate;
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

pub const SERVICE_NAME: &str = "connect";

const USER_AGENT: &str = concat!("connect-client/", env!("CARGO_PKG_VERSION"));

/// Amazon Connect client. Each call validates, marshals, signs and sends
/// the request, retrying throttling and server errors.
pub struct ConnectClient<T: Transport = ReqwestTransport> {
    transport: T,
    endpoint: Url,
    signer: SigV4Signer,
    credentials: Arc<dyn CredentialsProvider>,
    retry: RetryPolicy,
}

impl ConnectClient<ReqwestTransport> {
    pub fn from_config(
        config: &dyn ConfigProvider,
        credentials: Arc<dyn CredentialsProvider>,
    ) -> Result<Self> {
        let transport = ReqwestTransport::new(config.timeout())?;
        Self::with_transport(transport, config, credentials)
    }
}

impl<T: Transport> ConnectClient<T> {
    pub fn with_transport(
        transport: T,
        config: &dyn ConfigProvider,
        credentials: Arc<dyn CredentialsProvider>,
    ) -> Result<Self> {
        let raw = config.endpoint();
        let endpoint = Url::parse(&raw).map_err(|e| ConnectError::InvalidConfigValueError {
            field: "client.endpoint".to_string(),
            value: raw.clone(),
            reason: e.to_string(),
        })?;
        // 簽章使用的路徑即請求路徑，端點不可帶前綴
        if endpoint.path() != "/" {
            return Err(ConnectError::InvalidConfigValueError {
                field: "client.endpoint".to_string(),
                value: raw,
                reason: "endpoint must not contain a path".to_string(),
            });
        }

        Ok(Self {
            transport,
            endpoint,
            signer: SigV4Signer::new(config.region(), SERVICE_NAME),
            credentials,
            retry: RetryPolicy::from_config(config),
        })
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn execute<O: Operation>(&self, operation: &O) -> Result<O::Output> {
        operation.validate()?;
        let base = operation.to_http_request()?;
        tracing::debug!("{} {} {}", O::NAME, base.method.as_str(), base.path);

        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut request = base.clone();
            self.prepare(&mut request)?;

            let outcome = match self.transport.send(&self.endpoint, &request).await {
                Ok(response) => parse_response::<O::Output>(response),
                Err(e) => Err(e),
            };

            match outcome {
                Err(e) if e.is_retryable() && self.retry.should_retry(attempt) => {
                    let delay = self.retry.delay_for(attempt);
                    tracing::warn!(
                        "{} attempt {}/{} failed: {}; retrying in {:?}",
                        O::NAME,
                        attempt,
                        self.retry.max_attempts,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::debug!("{} failed: {}", O::NAME, e);
                    return Err(e);
                }
                Ok(output) => return Ok(output),
            }
        }
    }

    pub fn paginate<R: Paginated>(&self, request: R) -> Paginator<'_, T, R> {
        Paginator::new(self, request)
    }

    fn prepare(&self, request: &mut HttpRequest) -> Result<()> {
        request.set_header("host", host_header(&self.endpoint));
        request.set_header("user-agent", USER_AGENT);
        if request.body.is_some() {
            request.set_header("content-type", "application/json");
        }
        let credentials = self.credentials.credentials()?;
        self.signer.sign(request, &credentials, Utc::now())
    }
}

fn parse_response<O: serde::de::DeserializeOwned>(response: HttpResponse) -> Result<O> {
    if !response.is_success() {
        return Err(parse_error(&response));
    }
    // 無輸出的操作可能回傳空 body
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_slice(b"{}")?);
    }
    Ok(serde_json::from_slice(&response.body)?)
}

// 逐欄讀取，單一欄位型別不符時不影響其他欄位
fn body_str(body: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
}

pub(crate) fn parse_error(response: &HttpResponse) -> ConnectError {
    let body: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);
    let code = response
        .header("x-amzn-errortype")
        .map(str::to_string)
        .or_else(|| body_str(&body, &["__type"]))
        .or_else(|| body_str(&body, &["code", "Code"]));

    let kind = match code {
        Some(code) => ServiceErrorKind::from_code(&code),
        None => ServiceErrorKind::Unknown(format!("HTTP{}", response.status)),
    };

    ConnectError::ServiceError {
        kind,
        status: response.status,
        message: body_str(&body, &["message", "Message"]).unwrap_or_default(),
        request_id: response.header("x-amzn-requestid").map(str::to_string),
    }
}

macro_rules! operations {
    ($($method:ident($request:ty);)*) => {
        impl<T: Transport> ConnectClient<T> {
            $(
                pub async fn $method(
                    &self,
                    request: &$request,
                ) -> Result<<$request as Operation>::Output> {
                    self.execute(request).await
                }
            )*
        }
    };
}

operations! {
    create_user(CreateUserRequest);
    delete_user(DeleteUserRequest);
    describe_user(DescribeUserRequest);
    list_users(ListUsersRequest);
    update_user_hierarchy(UpdateUserHierarchyRequest);
    update_user_identity_info(UpdateUserIdentityInfoRequest);
    update_user_phone_config(UpdateUserPhoneConfigRequest);
    update_user_routing_profile(UpdateUserRoutingProfileRequest);
    update_user_security_profiles(UpdateUserSecurityProfilesRequest);
    describe_user_hierarchy_group(DescribeUserHierarchyGroupRequest);
    describe_user_hierarchy_structure(DescribeUserHierarchyStructureRequest);
    list_user_hierarchy_groups(ListUserHierarchyGroupsRequest);
    list_contact_flows(ListContactFlowsRequest);
    list_hours_of_operations(ListHoursOfOperationsRequest);
    list_phone_numbers(ListPhoneNumbersRequest);
    list_queues(ListQueuesRequest);
    list_routing_profiles(ListRoutingProfilesRequest);
    list_security_profiles(ListSecurityProfilesRequest);
    start_outbound_voice_contact(StartOutboundVoiceContactRequest);
    stop_contact(StopContactRequest);
    get_contact_attributes(GetContactAttributesRequest);
    update_contact_attributes(UpdateContactAttributesRequest);
    create_persistent_contact_association(CreatePersistentContactAssociationRequest);
    get_current_metric_data(GetCurrentMetricDataRequest);
    get_metric_data(GetMetricDataRequest);
    get_metric_data_v2(GetMetricDataV2Request);
    get_federation_token(GetFederationTokenRequest);
    list_tags_for_resource(ListTagsForResourceRequest);
    tag_resource(TagResourceRequest);
    untag_resource(UntagResourceRequest);
}
