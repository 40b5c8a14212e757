use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::Logger;
use actix_web::web::{self, Data};
use actix_web::{App, Error};

use crate::consts;
use crate::cors::CorsPolicy;
use crate::gateway::ForwardingGateway;
use crate::handlers;

pub fn create_app(
    gateway: Arc<ForwardingGateway>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = Arc::new(CorsPolicy::new(&gateway.config().cors));
    let middleware_cors = cors.clone();

    App::new()
        .wrap_fn(move |req, srv| {
            let cors = middleware_cors.clone();
            let origin = req.headers().get(header::ORIGIN).cloned();
            let fut = srv.call(req);
            async move {
                let mut res = fut.await?;
                cors.apply(res.headers_mut(), origin.as_ref());
                Ok(res)
            }
        })
        .wrap(Logger::default())
        .app_data(Data::from(gateway))
        .app_data(Data::from(cors))
        .service(web::resource(consts::CHAT_ROUTE).route(web::route().to(handlers::chat)))
}
