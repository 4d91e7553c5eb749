use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use hw_core::domain::value_objects::ShippingAddress;
use hw_core::repositories::{ComponentRepository, ConfigurationRepository};

use crate::dto::shipping::ShippingRatesRequest;
use crate::handlers::{handle_validation_errors, ok};
use crate::state::AppState;

/// Handler for POST /api/v1/shipping/rates
///
/// Blank address fields are accepted; an address outside the home country
/// only gets the postal option.
pub async fn rates<C, G>(
    req: HttpRequest,
    state: web::Data<AppState<C, G>>,
    request: web::Json<ShippingRatesRequest>,
) -> HttpResponse
where
    C: ComponentRepository + 'static,
    G: ConfigurationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let address = ShippingAddress::from(request.into_inner());
    ok(&req, state.shipping.rates(&address))
}
