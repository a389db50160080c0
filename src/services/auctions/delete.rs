use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{debug, info};

use super::{AuctionService, ENTITY_NAME};
use crate::utils::alert;

/// 删除不检查记录是否存在，总是返回 204
pub async fn delete_auction(
    service: &AuctionService,
    request: &HttpRequest,
    auction_id: i64,
) -> ActixResult<HttpResponse> {
    debug!("REST request to delete Auction : {}", auction_id);
    let storage = service.get_storage(request);

    match storage.delete_auction(auction_id).await {
        Ok(removed) => {
            if removed {
                info!("Auction {} deleted successfully", auction_id);
            }
            let mut builder = HttpResponse::NoContent();
            alert::entity_deletion_alert(ENTITY_NAME, auction_id).apply(&mut builder);
            Ok(builder.finish())
        }
        Err(e) => Ok(alert::internal_error(ENTITY_NAME, &e)),
    }
}
