mod initialize;
mod latest_price;
