//! Event loop driving the controller
//!
//! Page events arrive on an unbounded channel. Each [`Command`] the
//! controller returns is started immediately and joins a set of
//! in-flight requests; completions are fed back as messages in the
//! order they finish. Finished requests are handled before new page
//! events so replies are never starved by a busy page.

use futures::channel::mpsc;
use futures::future::LocalBoxFuture;
use futures::stream::{FusedStream, FuturesUnordered, StreamExt};
use futures::FutureExt;

use crate::client::GoldApi;
use crate::controller::{Command, Controller, Msg};
use crate::view::View;

/// Producer half handed to event listeners and timers
pub type EventSender = mpsc::UnboundedSender<Msg>;

pub type EventReceiver = mpsc::UnboundedReceiver<Msg>;

/// Create the page event channel
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded()
}

impl Command {
    /// Perform the remote call and wrap its outcome as a message
    pub async fn execute<A: GoldApi>(self, api: &A) -> Msg {
        match self {
            Command::FetchPrice => Msg::PriceLoaded(api.gold_price().await),
            Command::FetchAnalytics => Msg::AnalyticsLoaded(api.analytics().await),
            Command::SendChat(request) => Msg::ChatReplied(api.chat(&request).await),
            Command::SubmitPurchase { order, request } => Msg::PurchaseCompleted {
                order,
                result: api.purchase(&request).await,
            },
            Command::FetchHolding(user_id) => Msg::PortfolioLoaded(api.holding(&user_id).await),
        }
    }
}

/// Run until the event stream ends and every started request has landed
pub async fn run<A, V, S>(controller: &mut Controller<V>, api: &A, mut events: S)
where
    A: GoldApi,
    V: View,
    S: FusedStream<Item = Msg> + Unpin,
{
    let mut in_flight: FuturesUnordered<LocalBoxFuture<'_, Msg>> = FuturesUnordered::new();

    loop {
        let msg = futures::select_biased! {
            done = in_flight.select_next_some() => done,
            event = events.next() => match event {
                Some(msg) => msg,
                None => break,
            },
        };
        dispatch(controller, api, &mut in_flight, msg);
    }

    log::debug!("Event stream closed, draining {} request(s)", in_flight.len());
    while let Some(msg) = in_flight.next().await {
        dispatch(controller, api, &mut in_flight, msg);
    }
}

fn dispatch<'a, A: GoldApi, V: View>(
    controller: &mut Controller<V>,
    api: &'a A,
    in_flight: &mut FuturesUnordered<LocalBoxFuture<'a, Msg>>,
    msg: Msg,
) {
    for command in controller.update(msg) {
        log::debug!("Starting {command:?}");
        in_flight.push(command.execute(api).boxed_local());
    }
}
